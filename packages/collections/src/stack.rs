//! A vector-backed LIFO stack.

use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};

use crate::StackError;

/// A LIFO stack. The top is the last element of [`elements`](Stack::elements).
///
/// Besides push and pop, a stack supports concatenation (`+`), removal of elements (`-`) and
/// element-wise multiplication and division, by a scalar or by a slice of the same length.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    elements: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack {
            elements: Vec::new(),
        }
    }

    /// Elements from bottom to top.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn set_elements(&mut self, elements: impl IntoIterator<Item = T>) {
        self.elements = elements.into_iter().collect();
    }

    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }

    /// Removes every element and returns the now empty stack.
    pub fn clear(&mut self) -> &mut Self {
        self.elements.clear();
        self
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The top element, or `None` for an empty stack.
    pub fn top(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Replaces the top element and returns the old one.
    pub fn set_top(&mut self, value: T) -> Result<T, StackError> {
        let top = self.elements.last_mut().ok_or(StackError::Empty)?;
        Ok(std::mem::replace(top, value))
    }

    /// Removes the top element.
    pub fn remove_top(&mut self) -> Result<(), StackError> {
        self.pop().map(|_| ())
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.elements.pop().ok_or(StackError::Empty)
    }

    /// Pushes `items` in order, the last one ending on top.
    pub fn push(&mut self, items: impl IntoIterator<Item = T>) -> &mut Self {
        self.elements.extend(items);
        self
    }

    /// Removes the first (bottom-most) occurrence of each of `items`.
    ///
    /// Fails on the first item that isn't present; items before it stay removed.
    pub fn remove(&mut self, items: impl IntoIterator<Item = T>) -> Result<&mut Self, StackError>
    where
        T: PartialEq + Debug,
    {
        for item in items {
            let position = self
                .elements
                .iter()
                .position(|element| *element == item)
                .ok_or_else(|| StackError::NotFound {
                    element: format!("{:?}", item),
                })?;
            self.elements.remove(position);
        }
        Ok(self)
    }

    /// Returns a new stack with `f(position, element)` for every element, positions starting at
    /// 0 from the bottom.
    pub fn map_indexed<U>(&self, f: impl FnMut(usize, &T) -> U) -> Stack<U> {
        let mut f = f;
        Stack {
            elements: self
                .elements
                .iter()
                .enumerate()
                .map(|(i, element)| f(i, element))
                .collect(),
        }
    }

    /// Returns a copy with `other` pushed on top.
    #[must_use]
    pub fn concat(&self, other: impl IntoIterator<Item = T>) -> Self
    where
        T: Clone,
    {
        let mut result = self.clone();
        result.push(other);
        result
    }

    /// Returns a copy with the first occurrence of each of `items` removed.
    pub fn without(&self, items: impl IntoIterator<Item = T>) -> Result<Self, StackError>
    where
        T: Clone + PartialEq + Debug,
    {
        let mut result = self.clone();
        result.remove(items)?;
        Ok(result)
    }

    /// Returns a copy with every element multiplied by `factor`.
    #[must_use]
    pub fn scale<S: Clone>(&self, factor: S) -> Self
    where
        T: Clone + Mul<S, Output = T>,
    {
        self.map_indexed(|_, element| element.clone() * factor.clone())
    }

    /// Returns a copy with every element divided by `divisor`.
    #[must_use]
    pub fn divide<S: Clone>(&self, divisor: S) -> Self
    where
        T: Clone + Div<S, Output = T>,
    {
        self.map_indexed(|_, element| element.clone() / divisor.clone())
    }

    /// Returns a copy with each element multiplied by the factor at the same position.
    pub fn scale_each<S: Clone>(&self, factors: &[S]) -> Result<Self, StackError>
    where
        T: Clone + Mul<S, Output = T>,
    {
        self.check_len(factors.len())?;
        Ok(self.map_indexed(|i, element| element.clone() * factors[i].clone()))
    }

    /// Returns a copy with each element divided by the divisor at the same position.
    pub fn divide_each<S: Clone>(&self, divisors: &[S]) -> Result<Self, StackError>
    where
        T: Clone + Div<S, Output = T>,
    {
        self.check_len(divisors.len())?;
        Ok(self.map_indexed(|i, element| element.clone() / divisors[i].clone()))
    }

    fn check_len(&self, found: usize) -> Result<(), StackError> {
        if found == self.len() {
            Ok(())
        } else {
            Err(StackError::LengthMismatch {
                expected: self.len(),
                found,
            })
        }
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(elements: Vec<T>) -> Self {
        Stack { elements }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> Add for Stack<T> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.push(rhs);
        self
    }
}

impl<T: Clone + PartialEq + Debug> Sub for Stack<T> {
    type Output = Result<Self, StackError>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.without(rhs)
    }
}

impl<T: Clone + Mul<S, Output = T>, S: Clone> Mul<S> for Stack<T> {
    type Output = Self;

    fn mul(self, rhs: S) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Clone + Div<S, Output = T>, S: Clone> Div<S> for Stack<T> {
    type Output = Self;

    fn div(self, rhs: S) -> Self::Output {
        self.divide(rhs)
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "s{:?}", self.elements)
    }
}

/// Renders as `s[1, 2, 3]`.
impl<T: Debug> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fib() -> Stack<i32> {
        Stack::from(vec![1, 1, 2, 3, 5, 8])
    }

    #[test]
    fn top_of_empty_stack() {
        let mut s: Stack<i32> = Stack::new();
        assert_eq!(s.top(), None);
        assert_eq!(s.pop(), Err(StackError::Empty));
        assert_eq!(s.set_top(1), Err(StackError::Empty));
    }

    #[test]
    fn set_top_returns_previous() {
        let mut s = fib();
        assert_eq!(s.set_top(10), Ok(8));
        assert_eq!(s.elements(), &[1, 1, 2, 3, 5, 10]);
    }

    #[test]
    fn remove_reports_missing_element() {
        let mut s = fib();
        assert_eq!(
            s.remove([42]).map(|s| s.len()),
            Err(StackError::NotFound {
                element: "42".to_string()
            })
        );
    }

    #[test]
    fn element_wise_needs_matching_length() {
        assert_eq!(
            fib().scale_each(&[2]),
            Err(StackError::LengthMismatch {
                expected: 6,
                found: 1
            })
        );
        assert_eq!(
            Stack::from(vec![2, 4]).divide_each(&[2, 4]),
            Ok(Stack::from(vec![1, 1]))
        );
    }

    #[test]
    fn display_is_prefixed() {
        assert_eq!(fib().to_string(), "s[1, 1, 2, 3, 5, 8]");
        assert_eq!(Stack::<u8>::new().to_string(), "s[]");
    }
}
