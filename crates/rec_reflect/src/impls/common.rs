use core::cmp::Ordering;
use core::fmt;

use crate::Reflect;
use crate::ops::{ReflectRef, Struct};

/// A function use for implementing [`Reflect::reflect_partial_eq`].
///
/// # Rules
///
/// 1. If `other` is not `Struct`, return `Some(false)`.
/// 2. If `self.len` != `other.len`, return `Some(false)`.
/// 3. Compare fields by name.
///    Return `Some(false)` if some field names do not match.
///    Return `None` or `Some(false)` if some fields return `None` or `Some(false)`.
/// 4. return `Some(true)`
#[inline(never)]
pub fn struct_partial_eq(x: &dyn Struct, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Struct(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.field_len() != y.field_len() {
        return Some(false);
    }

    for (idx, y_field) in y.iter_fields().enumerate() {
        let x_field = y.name_at(idx).and_then(|name| x.field(name));
        let Some(x_field) = x_field else {
            return Some(false);
        };
        let result = x_field.reflect_partial_eq(y_field);
        if result != Some(true) {
            return result;
        }
    }
    Some(true)
}

/// A function use for implementing [`Reflect::reflect_partial_cmp`].
///
/// Records are ordered lexicographically over their fields in declaration
/// order, the first field is the most significant.
///
/// # Rules
///
/// 1. If `other` is not `Struct`, or the field count differs, return `None`.
/// 2. Walk the fields by index; if two names differ, return `None`.
/// 3. The first field that is not `Some(Equal)` decides the result.
/// 4. return `Some(Equal)`
#[inline(never)]
pub fn struct_partial_cmp(x: &dyn Struct, y: &dyn Reflect) -> Option<Ordering> {
    let ReflectRef::Struct(y) = y.reflect_ref() else {
        return None;
    };

    if x.field_len() != y.field_len() {
        return None;
    }

    for (idx, (x_field, y_field)) in x.iter_fields().zip(y.iter_fields()).enumerate() {
        if x.name_at(idx) != y.name_at(idx) {
            return None;
        }
        match x_field.reflect_partial_cmp(y_field)? {
            Ordering::Equal => continue,
            ordering => return Some(ordering),
        }
    }
    Some(Ordering::Equal)
}

/// A function use for implementing [`Reflect::reflect_debug`].
///
/// Output: `Point { x: 1, y: 2 }`.
#[inline(never)]
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_name());

    for (index, field) in dyn_struct.iter_fields().enumerate() {
        debug.field(
            dyn_struct.name_at(index).unwrap_or_default(),
            &field as &dyn fmt::Debug,
        );
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_display`].
///
/// Writes one line per field in declaration order, with a comma after every
/// field but the last, and a newline after the closing brace:
///
/// ```text
/// (Point) {
/// 	x : 1,
/// 	y : 2
/// }
/// ```
///
/// Nested records are written in place, indented one more tab.
#[inline(never)]
pub fn struct_display(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_struct(dyn_struct, f, 0)?;
    f.write_str("\n")
}

fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str("\t")?;
    }
    Ok(())
}

fn write_struct(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    writeln!(f, "({}) {{", dyn_struct.reflect_type_name())?;

    let len = dyn_struct.field_len();
    for (index, field) in dyn_struct.iter_fields().enumerate() {
        write_indent(f, depth + 1)?;
        write!(f, "{} : ", dyn_struct.name_at(index).unwrap_or_default())?;
        match field.reflect_ref() {
            ReflectRef::Struct(inner) => write_struct(inner, f, depth + 1)?,
            ReflectRef::Opaque(value) => value.reflect_display(f)?,
        }
        f.write_str(if index + 1 < len { ",\n" } else { "\n" })?;
    }

    write_indent(f, depth)?;
    f.write_str("}")
}
