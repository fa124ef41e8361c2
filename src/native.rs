use serde::{Deserialize, Serialize};

/// Size and alignment of a type under the native 64-bit model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeLayout {
    pub size: usize,
    pub align: usize,
}

impl TypeLayout {
    pub const fn basic(size: usize) -> TypeLayout {
        TypeLayout { size, align: size }
    }
}

pub const CHAR: TypeLayout = TypeLayout::basic(1);
pub const SHORT: TypeLayout = TypeLayout::basic(2);
pub const INT: TypeLayout = TypeLayout::basic(4);
pub const FLOAT: TypeLayout = TypeLayout::basic(4);
pub const DOUBLE: TypeLayout = TypeLayout::basic(8);
pub const POINTER: TypeLayout = TypeLayout::basic(8);
