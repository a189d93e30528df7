//! Parameter-type extraction
//!
//! Maps a read-only list of parameter records to their declared types, either
//! into a fresh `Vec` ([`to_types`]) or into a caller-owned buffer
//! ([`fill_types`]). Output position `i` always holds the type of input
//! parameter `i`.

use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{ReflectError, ReflectResult};

/// A parameter record that can report its declared type
///
/// Implemented by [`ParameterInfo`](crate::ParameterInfo); hosts with their own
/// metadata representation implement it for their records instead.
pub trait ParameterMetadata {
    /// Type descriptor produced by the host's type system
    type Type: Clone;

    /// Declared type of this parameter
    fn parameter_type(&self) -> &Self::Type;
}

impl<P: ParameterMetadata + ?Sized> ParameterMetadata for &P {
    type Type = P::Type;

    #[inline]
    fn parameter_type(&self) -> &P::Type {
        (**self).parameter_type()
    }
}

impl<P: ParameterMetadata + ?Sized> ParameterMetadata for Box<P> {
    type Type = P::Type;

    #[inline]
    fn parameter_type(&self) -> &P::Type {
        (**self).parameter_type()
    }
}

impl<P: ParameterMetadata + ?Sized> ParameterMetadata for Rc<P> {
    type Type = P::Type;

    #[inline]
    fn parameter_type(&self) -> &P::Type {
        (**self).parameter_type()
    }
}

impl<P: ParameterMetadata + ?Sized> ParameterMetadata for Arc<P> {
    type Type = P::Type;

    #[inline]
    fn parameter_type(&self) -> &P::Type {
        (**self).parameter_type()
    }
}

/// Collect the declared type of every parameter into a new `Vec`
///
/// An empty list yields `Vec::new()`, which does not allocate.
#[must_use]
pub fn to_types<P: ParameterMetadata>(parameters: &[P]) -> Vec<P::Type> {
    match parameters {
        [] => Vec::new(),
        [only] => vec![only.parameter_type().clone()],
        _ => parameters
            .iter()
            .map(|p| p.parameter_type().clone())
            .collect(),
    }
}

/// Write the declared type of every parameter into `destination`
///
/// Slots past `parameters.len()` are left as they were. If `destination` is
/// shorter than `parameters`, returns [`ReflectError::InvalidArgument`] and
/// nothing is written.
#[inline]
pub fn fill_types<P: ParameterMetadata>(
    parameters: &[P],
    destination: &mut [P::Type],
) -> ReflectResult<()> {
    trace!(
        parameters = parameters.len(),
        capacity = destination.len(),
        "fill_types"
    );

    if destination.len() < parameters.len() {
        debug!(
            required = parameters.len(),
            actual = destination.len(),
            "Destination too small for parameter types"
        );
        return Err(ReflectError::destination_too_small(
            parameters.len(),
            destination.len(),
        ));
    }

    for (slot, param) in destination.iter_mut().zip(parameters) {
        // clone_from lets heap-backed types reuse the slot's storage
        slot.clone_from(param.parameter_type());
    }

    Ok(())
}

/// Method-call form of [`to_types`] and [`fill_types`] for parameter slices
pub trait ParameterTypes {
    /// Type descriptor produced for each parameter
    type Type;

    /// See [`to_types`]
    #[must_use]
    fn to_types(&self) -> Vec<Self::Type>;

    /// See [`fill_types`]
    fn fill_types(&self, destination: &mut [Self::Type]) -> ReflectResult<()>;
}

impl<P: ParameterMetadata> ParameterTypes for [P] {
    type Type = P::Type;

    #[inline]
    fn to_types(&self) -> Vec<P::Type> {
        to_types(self)
    }

    #[inline]
    fn fill_types(&self, destination: &mut [P::Type]) -> ReflectResult<()> {
        fill_types(self, destination)
    }
}
