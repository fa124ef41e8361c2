use crate::error::Error;
use crate::layout::LayoutResult;

pub const PADDING_MARKER: char = '.';

const DEFAULT_MAX_WIDTH: usize = 64;

/// What a single byte of the record holds. Tagging bytes with a variant
/// instead of the raw marker character keeps field bytes and padding
/// unambiguous even if a marker were to collide with the padding marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ByteTag {
    Field(usize),
    Padding,
}

/// Tags every byte in `[0, total_size)`, failing if a field's range runs
/// into an already tagged byte or past the end of the record. Either
/// would mean the layout the caller handed over is corrupt, and silently
/// overwriting tags would hide that.
pub fn byte_map(layout: &LayoutResult) -> Result<Vec<ByteTag>, Error> {
    let mut tags = vec![ByteTag::Padding; layout.total_size];

    for (index, field) in layout.fields.iter().enumerate() {
        for offset in field.offset..field.offset + field.spec.size {
            match tags.get_mut(offset) {
                Some(slot) if *slot == ByteTag::Padding => *slot = ByteTag::Field(index),
                _ => {
                    return Err(Error::Overlap {
                        field: field.spec.name.clone(),
                        offset,
                    });
                }
            }
        }
    }

    Ok(tags)
}

pub struct Renderer {
    pub max_width: usize,
}

impl Default for Renderer {
    fn default() -> Renderer {
        Renderer {
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl Renderer {
    pub fn new(max_width: usize) -> Renderer {
        Renderer { max_width }
    }

    /// Renders a byte-per-byte diagram of the record: a header, the
    /// field offsets, a byte-index ruler with a marker line aligned
    /// under it, and a legend.
    pub fn render(&self, name: &str, layout: &LayoutResult) -> Result<String, Error> {
        if layout.total_size > self.max_width {
            return Err(Error::TooWide {
                total_size: layout.total_size,
                max_width: self.max_width,
            });
        }

        let tags = byte_map(layout)?;

        let mut out = format!(
            "struct {} (size {}, align {})\n",
            name, layout.total_size, layout.total_alignment
        );

        for field in &layout.fields {
            out.push_str(&format!(
                "  {}: offset {}, size {}, align {}\n",
                field.spec.name, field.offset, field.spec.size, field.spec.align
            ));
        }

        if layout.total_size > 0 {
            for index in 0..layout.total_size {
                out.push_str(&format!("{:>3}", index));
            }
            out.push('\n');

            for tag in &tags {
                let marker = match tag {
                    ByteTag::Field(index) => layout.fields[*index].spec.marker,
                    ByteTag::Padding => PADDING_MARKER,
                };
                out.push_str(&format!("{:>3}", marker));
            }
            out.push('\n');
        }

        let legend = layout
            .fields
            .iter()
            .map(|field| format!("{} = {}", field.spec.marker, field.spec.name))
            .chain(std::iter::once(format!("{} = padding", PADDING_MARKER)))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("legend: {}\n", legend));

        Ok(out)
    }
}
