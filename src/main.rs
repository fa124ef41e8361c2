use anyhow::Result;
use clap::Parser;
use padviz::layout::{check_fields, compute_layout, FieldSpec, LayoutResult};
use padviz::native;
use padviz::render::Renderer;

#[derive(Parser, Debug)]
struct Args {
    /// Widest record, in bytes, that the renderer will accept.
    #[arg(long, default_value_t = 64)]
    max_width: usize,
}

fn dump_native_layouts() {
    let primitives = [
        ("char", native::CHAR),
        ("int", native::INT),
        ("double", native::DOUBLE),
        ("char*", native::POINTER),
    ];

    for (name, ty) in primitives {
        println!(
            "sizeof({}) = {}, alignof({}) = {}",
            name, ty.size, name, ty.align
        );
    }
}

fn show(renderer: &Renderer, name: &str, fields: &[FieldSpec]) -> Result<LayoutResult> {
    check_fields(fields)?;
    let layout = compute_layout(fields);

    println!();
    print!("{}", renderer.render(name, &layout)?);

    Ok(layout)
}

fn main() -> Result<()> {
    let Args { max_width } = Args::try_parse()?;
    let renderer = Renderer::new(max_width);

    dump_native_layouts();

    // A struct of two string pointers, 16 bytes with no padding.
    let name_fields = vec![
        FieldSpec::of("first", 'F', native::POINTER),
        FieldSpec::of("last", 'L', native::POINTER),
    ];
    let name_layout = show(&renderer, "Name", &name_fields)?;

    // The classic padding demonstration: a char followed by an int picks
    // up 3 padding bytes, then everything 8-aligned falls into place.
    // The Name record computed above nests as a 16 byte field.
    let human_fields = vec![
        FieldSpec::of("first_initial", 'F', native::CHAR),
        FieldSpec::of("age", 'A', native::INT),
        FieldSpec::of("height", 'H', native::DOUBLE),
        FieldSpec::of("name", 'N', name_layout.type_layout()),
    ];
    show(&renderer, "Human", &human_fields)?;

    Ok(())
}
