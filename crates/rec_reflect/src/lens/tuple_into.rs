/// Element-wise [`From`] conversion between tuples of the same arity.
///
/// Implemented for tuples of up to 12 elements.
///
/// ```
/// use rec_reflect::lens::TupleInto;
///
/// let values: (i64, String) = (1_i32, "x").tuple_into();
/// assert_eq!(values, (1, String::from("x")));
/// ```
pub trait TupleInto<T> {
    /// Converts every element.
    fn tuple_into(self) -> T;
}

macro_rules! impl_tuple_into {
    ($(($S:ident, $T:ident, $v:ident)),*) => {
        impl<$($S, $T: From<$S>),*> TupleInto<($($T,)*)> for ($($S,)*) {
            #[inline]
            #[allow(clippy::unused_unit, reason = "zero arity")]
            fn tuple_into(self) -> ($($T,)*) {
                let ($($v,)*) = self;
                ($(<$T as From<$S>>::from($v),)*)
            }
        }
    };
}

impl_tuple_into!();
impl_tuple_into!((S0, T0, v0));
impl_tuple_into!((S0, T0, v0), (S1, T1, v1));
impl_tuple_into!((S0, T0, v0), (S1, T1, v1), (S2, T2, v2));
impl_tuple_into!((S0, T0, v0), (S1, T1, v1), (S2, T2, v2), (S3, T3, v3));
impl_tuple_into!(
    (S0, T0, v0), (S1, T1, v1), (S2, T2, v2), (S3, T3, v3),
    (S4, T4, v4)
);
impl_tuple_into!(
    (S0, T0, v0), (S1, T1, v1), (S2, T2, v2), (S3, T3, v3),
    (S4, T4, v4), (S5, T5, v5)
);
impl_tuple_into!(
    (S0, T0, v0), (S1, T1, v1), (S2, T2, v2), (S3, T3, v3),
    (S4, T4, v4), (S5, T5, v5), (S6, T6, v6)
);
impl_tuple_into!(
    (S0, T0, v0), (S1, T1, v1), (S2, T2, v2), (S3, T3, v3),
    (S4, T4, v4), (S5, T5, v5), (S6, T6, v6), (S7, T7, v7)
);
impl_tuple_into!(
    (S0, T0, v0), (S1, T1, v1), (S2, T2, v2), (S3, T3, v3),
    (S4, T4, v4), (S5, T5, v5), (S6, T6, v6), (S7, T7, v7),
    (S8, T8, v8)
);
impl_tuple_into!(
    (S0, T0, v0), (S1, T1, v1), (S2, T2, v2), (S3, T3, v3),
    (S4, T4, v4), (S5, T5, v5), (S6, T6, v6), (S7, T7, v7),
    (S8, T8, v8), (S9, T9, v9)
);
impl_tuple_into!(
    (S0, T0, v0), (S1, T1, v1), (S2, T2, v2), (S3, T3, v3),
    (S4, T4, v4), (S5, T5, v5), (S6, T6, v6), (S7, T7, v7),
    (S8, T8, v8), (S9, T9, v9), (S10, T10, v10)
);
impl_tuple_into!(
    (S0, T0, v0), (S1, T1, v1), (S2, T2, v2), (S3, T3, v3),
    (S4, T4, v4), (S5, T5, v5), (S6, T6, v6), (S7, T7, v7),
    (S8, T8, v8), (S9, T9, v9), (S10, T10, v10), (S11, T11, v11)
);
