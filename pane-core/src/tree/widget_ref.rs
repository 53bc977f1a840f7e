use std::{cell::Ref, ops::Deref};

use crate::RefCx;

pub struct WidgetRef<'a, T: ?Sized> {
    pub widget: Ref<'a, T>,
    pub cx:     RefCx<'a>,
}

impl<T: ?Sized> Deref for WidgetRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.widget
    }
}
