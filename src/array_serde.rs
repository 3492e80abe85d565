// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use alloc::format;
use alloc::vec::Vec;
use core::convert::TryFrom;
use core::fmt;
use core::marker::PhantomData;

use crate::iterators::Iter;
use crate::{Ix, Tensor, TensorLike, TensorView, TensorViewMut};

/// Version of the serialized tensor format.
const TENSOR_FORMAT_VERSION: u8 = 1u8;

/// Verifies that the version of the deserialized tensor matches the current
/// `TENSOR_FORMAT_VERSION`.
fn verify_version<E>(v: u8) -> Result<(), E>
where
    E: de::Error,
{
    if v != TENSOR_FORMAT_VERSION {
        let err_msg = format!("unknown tensor version: {}", v);
        Err(de::Error::custom(err_msg))
    } else {
        Ok(())
    }
}

fn serialize_tensor<T, Se, const N: usize>(tensor: &T, serializer: Se) -> Result<Se::Ok, Se::Error>
where
    T: TensorLike<N> + ?Sized,
    T::Elem: Serialize,
    Se: Serializer,
{
    let mut state = serializer.serialize_struct("Tensor", 3)?;
    state.serialize_field("v", &TENSOR_FORMAT_VERSION)?;
    state.serialize_field("shape", &tensor.shape()[..])?;
    state.serialize_field("data", &Sequence(tensor.iter()))?;
    state.end()
}

macro_rules! impl_serialize {
    ([$($generics:tt)*] $tensor:ty) => {
        /// Serialized as the shape and the elements in row-major order,
        /// whatever the layout.
        ///
        /// **Requires crate feature `"serde"`**
        impl<$($generics)* A: Serialize, const N: usize> Serialize for $tensor {
            fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
            where
                Se: Serializer,
            {
                serialize_tensor(self, serializer)
            }
        }
    };
}

impl_serialize!([] Tensor<A, N>);
impl_serialize!(['a,] TensorView<'a, A, N>);
impl_serialize!(['a,] TensorViewMut<'a, A, N>);

// private iterator wrapper
struct Sequence<'a, A, const N: usize>(Iter<'a, A, N>);

impl<'a, A, const N: usize> Serialize for Sequence<'a, A, N>
where
    A: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let iter = &self.0;
        let mut seq = serializer.serialize_seq(Some(iter.len()))?;
        for elt in iter.clone() {
            seq.serialize_element(elt)?;
        }
        seq.end()
    }
}

struct TensorVisitor<A, const N: usize> {
    _marker: PhantomData<A>,
}

enum TensorField {
    Version,
    Shape,
    Data,
}

impl<A, const N: usize> TensorVisitor<A, N> {
    pub fn new() -> Self {
        TensorVisitor { _marker: PhantomData }
    }
}

static TENSOR_FIELDS: &[&str] = &["v", "shape", "data"];

/// **Requires crate feature `"serde"`**
impl<'de, A, const N: usize> Deserialize<'de> for Tensor<A, N>
where
    A: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Tensor<A, N>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("Tensor", TENSOR_FIELDS, TensorVisitor::new())
    }
}

impl<'de> Deserialize<'de> for TensorField {
    fn deserialize<D>(deserializer: D) -> Result<TensorField, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TensorFieldVisitor;

        impl<'de> Visitor<'de> for TensorFieldVisitor {
            type Value = TensorField;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#""v", "shape", or "data""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<TensorField, E>
            where
                E: de::Error,
            {
                match value {
                    "v" => Ok(TensorField::Version),
                    "shape" => Ok(TensorField::Shape),
                    "data" => Ok(TensorField::Data),
                    other => Err(de::Error::unknown_field(other, TENSOR_FIELDS)),
                }
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<TensorField, E>
            where
                E: de::Error,
            {
                match value {
                    b"v" => Ok(TensorField::Version),
                    b"shape" => Ok(TensorField::Shape),
                    b"data" => Ok(TensorField::Data),
                    other => Err(de::Error::unknown_field(
                        &format!("{:?}", other),
                        TENSOR_FIELDS,
                    )),
                }
            }
        }

        deserializer.deserialize_identifier(TensorFieldVisitor)
    }
}

/// Build the tensor once every field is known.
fn tensor_from_parts<A, E, const N: usize>(shape: Vec<Ix>, data: Vec<A>) -> Result<Tensor<A, N>, E>
where
    E: de::Error,
{
    let len = shape.len();
    let shape = match <[Ix; N]>::try_from(shape) {
        Ok(shape) => shape,
        Err(_) => {
            return Err(de::Error::custom(format!(
                "expected a shape of {} axes, found {}",
                N, len
            )))
        }
    };
    Tensor::from_shape_vec(shape, data)
        .map_err(|_| de::Error::custom("data and shape must match in size"))
}

impl<'de, A, const N: usize> Visitor<'de> for TensorVisitor<A, N>
where
    A: Deserialize<'de>,
{
    type Value = Tensor<A, N>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("ndtensor representation")
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<Tensor<A, N>, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let v: u8 = match visitor.next_element()? {
            Some(value) => value,
            None => {
                return Err(de::Error::invalid_length(0, &self));
            }
        };

        verify_version(v)?;

        let shape: Vec<Ix> = match visitor.next_element()? {
            Some(value) => value,
            None => {
                return Err(de::Error::invalid_length(1, &self));
            }
        };

        let data: Vec<A> = match visitor.next_element()? {
            Some(value) => value,
            None => {
                return Err(de::Error::invalid_length(2, &self));
            }
        };

        tensor_from_parts(shape, data)
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<Tensor<A, N>, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut v: Option<u8> = None;
        let mut data: Option<Vec<A>> = None;
        let mut shape: Option<Vec<Ix>> = None;

        while let Some(key) = visitor.next_key()? {
            match key {
                TensorField::Version => {
                    let val = visitor.next_value()?;
                    verify_version(val)?;
                    v = Some(val);
                }
                TensorField::Data => {
                    data = Some(visitor.next_value()?);
                }
                TensorField::Shape => {
                    shape = Some(visitor.next_value()?);
                }
            }
        }

        if v.is_none() {
            return Err(de::Error::missing_field("v"));
        }
        let data = match data {
            Some(data) => data,
            None => return Err(de::Error::missing_field("data")),
        };
        let shape = match shape {
            Some(shape) => shape,
            None => return Err(de::Error::missing_field("shape")),
        };

        tensor_from_parts(shape, data)
    }
}
