use crate::error::Error;
use crate::native::TypeLayout;
use crate::render::PADDING_MARKER;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A field as declared by the caller. Declaration order is significant:
/// it is the placement order, not alphabetical and not by size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub marker: char,
    pub align: usize,
    pub size: usize,
}

impl FieldSpec {
    pub fn new(name: &str, marker: char, align: usize, size: usize) -> FieldSpec {
        FieldSpec {
            name: name.to_string(),
            marker,
            align,
            size,
        }
    }

    pub fn of(name: &str, marker: char, ty: TypeLayout) -> FieldSpec {
        FieldSpec::new(name, marker, ty.align, ty.size)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedField {
    pub spec: FieldSpec,
    pub offset: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub fields: Vec<PlacedField>,
    pub total_size: usize,
    pub total_alignment: usize,
}

impl LayoutResult {
    /// The computed record viewed as a type, so it can be nested as a
    /// field of another record.
    pub fn type_layout(&self) -> TypeLayout {
        TypeLayout {
            size: self.total_size,
            align: self.total_alignment,
        }
    }
}

pub fn align_up(offset: usize, align: usize) -> usize {
    let misalignment = offset % align;
    if misalignment > 0 {
        offset + align - misalignment
    } else {
        offset
    }
}

/// Validates a field list before layout. Rejects alignments that are not
/// powers of two, the reserved padding marker, and marker reuse.
pub fn check_fields(fields: &[FieldSpec]) -> Result<(), Error> {
    let mut seen: HashMap<char, &str> = HashMap::new();

    for field in fields {
        if !field.align.is_power_of_two() {
            return Err(Error::BadAlignment {
                field: field.name.clone(),
                align: field.align,
            });
        }

        if field.marker == PADDING_MARKER {
            return Err(Error::ReservedMarker {
                field: field.name.clone(),
            });
        }

        if let Some(first) = seen.insert(field.marker, &field.name) {
            return Err(Error::DuplicateMarker {
                marker: field.marker,
                first: first.to_string(),
                second: field.name.clone(),
            });
        }
    }

    Ok(())
}

/// Sequential placement with alignment, the rule C compilers use for
/// struct members: round a running cursor up to each field's alignment,
/// place the field there, advance by its size. The final cursor is
/// rounded up to the record alignment so arrays of the record stay
/// aligned.
///
/// Pure and total; fields are trusted to satisfy `check_fields`.
pub fn compute_layout(fields: &[FieldSpec]) -> LayoutResult {
    let (end, placed) = fields.iter().fold(
        (0, Vec::with_capacity(fields.len())),
        |(cursor, mut placed), spec| {
            let offset = align_up(cursor, spec.align);
            placed.push(PlacedField {
                spec: spec.clone(),
                offset,
            });
            (offset + spec.size, placed)
        },
    );

    let total_alignment = placed
        .iter()
        .map(|field| field.spec.align)
        .max()
        .unwrap_or(1);

    LayoutResult {
        fields: placed,
        total_size: align_up(end, total_alignment),
        total_alignment,
    }
}
