use std::{
    cell::RefMut,
    ops::{Deref, DerefMut},
};

use crate::MutCx;

pub struct WidgetMut<'a, T: ?Sized> {
    pub widget: RefMut<'a, T>,
    pub cx:     MutCx<'a>,
}

impl<T: ?Sized> Deref for WidgetMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.widget
    }
}

impl<T: ?Sized> DerefMut for WidgetMut<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.widget
    }
}
