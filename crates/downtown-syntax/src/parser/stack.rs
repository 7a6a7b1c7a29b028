//! A plain LIFO stack backed by a `Vec`, with the two extras the reducer
//! needs: indexed access while scanning backward and splitting off the tail.

use std::ops::Index;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    elements: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, element: T) {
        self.elements.push(element);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Removes every element from `index` to the top, returned bottom-to-top.
    pub fn pop_from(&mut self, index: usize) -> Vec<T> {
        let index = index.min(self.elements.len());
        self.elements.split_off(index)
    }

    /// Elements bottom-to-top.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T> Index<usize> for Stack<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}
