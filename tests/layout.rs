use padviz::layout::{check_fields, compute_layout, FieldSpec};

#[test]
fn record_declared_in_ron_lays_out_like_the_c_struct() {
    let fields: Vec<FieldSpec> = ron::from_str(
        r#"[
            (name: "first_initial", marker: 'F', align: 1, size: 1),
            (name: "age", marker: 'A', align: 4, size: 4),
            (name: "height", marker: 'H', align: 8, size: 8),
            (name: "name", marker: 'N', align: 8, size: 16),
        ]"#,
    )
    .unwrap();

    check_fields(&fields).unwrap();
    let layout = compute_layout(&fields);

    let offsets = layout
        .fields
        .iter()
        .map(|field| field.offset)
        .collect::<Vec<_>>();

    assert_eq!(offsets, vec![0, 4, 8, 16]);
    assert_eq!(layout.total_size, 32);
    assert_eq!(layout.total_alignment, 8);
}
