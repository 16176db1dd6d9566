use approx::assert_abs_diff_eq;
use box_series::api::{
    BoxModelInputs, ColorPalette, FixedColor, LabelFormatter, LocaleLabelFormatter,
    OrdinalColorScheme, build_box_model, recompute, recompute_groups,
};
use box_series::core::{
    BandScale, LinearScale, Quartiles, Sample, SampleValue, SeriesGroup, WhiskerExtent,
    project_box,
};
use box_series::render::Color;
use box_series::ChartError;

fn axes() -> (BandScale, LinearScale) {
    let band = BandScale::new(["a", "b", "c", "d"], 0.0, 400.0).expect("band scale");
    let linear = LinearScale::new(0.0, 100.0, 300.0, 0.0).expect("linear scale");
    (band, linear)
}

fn inputs<'a>(
    group: &'a SeriesGroup,
    band: &'a BandScale,
    linear: &'a LinearScale,
    colors: &'a OrdinalColorScheme,
    formatter: &'a LocaleLabelFormatter,
) -> BoxModelInputs<'a> {
    BoxModelInputs {
        group,
        category_axis: band,
        value_axis: linear,
        colors,
        formatter,
        round_box_width: true,
    }
}

fn scheme() -> OrdinalColorScheme {
    OrdinalColorScheme::from_palette(["a", "b", "c", "d"], ColorPalette::Vivid).expect("scheme")
}

#[test]
fn recompute_builds_complete_model() {
    let (band, linear) = axes();
    let colors = scheme();
    let formatter = LocaleLabelFormatter::default();
    let group = SeriesGroup::from_values("b", &[100.0, 0.0, 50.0, 25.0, 75.0]);

    let model = recompute(inputs(&group, &band, &linear, &colors, &formatter))
        .expect("recompute")
        .expect("non-empty group");

    assert_eq!(model.label, "b");
    assert_eq!(model.formatted_label, "b");
    assert_eq!(model.value, 50.0);
    assert_eq!(model.quartiles.as_array(), [25.0, 50.0, 75.0]);
    assert_eq!(model.extent, WhiskerExtent { min: 0.0, max: 100.0 });
    assert_abs_diff_eq!(model.x, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(model.y, 75.0, epsilon = 1e-9);
    assert_abs_diff_eq!(model.width, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(model.height, 150.0, epsilon = 1e-9);
    assert_eq!(model.line_coordinates, [150.0, 300.0, 150.0, 0.0]);
    assert_eq!(model.data, group.series);
    assert_eq!(model.color, Color::from_hex("#3f51b5").expect("hex"));
    assert_eq!(model.aria_label, "b - Quantile 50%: 50");
}

#[test]
fn recompute_is_idempotent() {
    let (band, linear) = axes();
    let colors = scheme();
    let formatter = LocaleLabelFormatter::default();
    let group = SeriesGroup::from_values("c", &[3.25, 9.5, 1.0, 7.75, 4.0, 12.0]);

    let first = recompute(inputs(&group, &band, &linear, &colors, &formatter)).expect("first");
    let second = recompute(inputs(&group, &band, &linear, &colors, &formatter)).expect("second");
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn empty_group_yields_no_model_without_error() {
    let (band, linear) = axes();
    let colors = scheme();
    let formatter = LocaleLabelFormatter::default();
    let group = SeriesGroup::new("a", Vec::new());

    let model = recompute(inputs(&group, &band, &linear, &colors, &formatter)).expect("no error");
    assert!(model.is_none());
}

#[test]
fn malformed_sample_is_reported_per_group() {
    let (band, linear) = axes();
    let colors = scheme();
    let formatter = LocaleLabelFormatter::default();
    let group = SeriesGroup::new(
        "a",
        vec![
            Sample::new("x", 1.0),
            Sample {
                name: "y".to_owned(),
                value: SampleValue::Text("oops".to_owned()),
            },
        ],
    );

    let err = recompute(inputs(&group, &band, &linear, &colors, &formatter))
        .expect_err("malformed sample");
    assert!(matches!(err, ChartError::InvalidSample { index: 1, .. }));
}

#[test]
fn aria_label_uses_localized_median() {
    let band = BandScale::new(["Ventas"], 0.0, 100.0).expect("band scale");
    let linear = LinearScale::new(0.0, 20_000.0, 500.0, 0.0).expect("linear scale");
    let colors = FixedColor(Color::rgb(0.2, 0.4, 0.6));
    let group = SeriesGroup::from_values("Ventas", &[12_345.5]);

    let quartiles = Quartiles {
        q1: 12_345.5,
        median: 12_345.5,
        q3: 12_345.5,
    };
    let extent = WhiskerExtent::new(12_345.5, 12_345.5).expect("extent");
    let geometry = project_box("Ventas", extent, quartiles, 100.0, &band, &linear).expect("project");

    let es = LocaleLabelFormatter::new(box_series::api::LabelLocale::EsEs);
    let model = build_box_model(&group, quartiles, extent, geometry, &colors, &es);
    assert_eq!(model.formatted_label, "Ventas");
    assert_eq!(model.aria_label, "Ventas - Quantile 50%: 12.345,5");

    let padded = SeriesGroup::from_values(" Ventas ", &[12_345.5]);
    let model = build_box_model(&padded, quartiles, extent, geometry, &colors, &es);
    assert_eq!(model.aria_label, " Ventas  - Quantile 50%: 12.345,5");

    let en = LocaleLabelFormatter::default();
    let model = build_box_model(&group, quartiles, extent, geometry, &colors, &en);
    assert_eq!(model.aria_label, "Ventas - Quantile 50%: 12,345.5");
    assert_eq!(model.color, Color::rgb(0.2, 0.4, 0.6));
}

struct UpperCaseFormatter;

impl LabelFormatter for UpperCaseFormatter {
    fn format_name(&self, name: &str) -> String {
        name.to_uppercase()
    }

    fn format_value(&self, value: f64) -> String {
        format!("{value:.1}")
    }
}

#[test]
fn custom_formatter_drives_labels() {
    let (band, linear) = axes();
    let colors = scheme();
    let group = SeriesGroup::from_values("d", &[1.0, 2.0, 3.0]);
    let model = recompute(BoxModelInputs {
        group: &group,
        category_axis: &band,
        value_axis: &linear,
        colors: &colors,
        formatter: &UpperCaseFormatter,
        round_box_width: false,
    })
    .expect("recompute")
    .expect("non-empty");

    assert_eq!(model.formatted_label, "D");
    assert_eq!(model.aria_label, "D - Quantile 50%: 2.0");
}

#[test]
fn recompute_groups_recovers_from_bad_groups() {
    let (band, linear) = axes();
    let colors = scheme();
    let formatter = LocaleLabelFormatter::default();
    let groups = vec![
        SeriesGroup::from_values("a", &[1.0, 2.0, 3.0]),
        SeriesGroup::from_values("b", &[1.0, f64::NAN]),
        SeriesGroup::new("c", Vec::new()),
        SeriesGroup::from_values("unknown", &[4.0]),
        SeriesGroup::from_values("d", &[10.0, 20.0]),
    ];

    let models = recompute_groups(&groups, &band, &linear, &colors, &formatter, true);

    assert_eq!(models.len(), groups.len());
    assert!(models[0].is_some());
    assert!(models[1].is_none());
    assert!(models[2].is_none());
    assert!(models[3].is_none());
    let last = models[4].as_ref().expect("d survives");
    assert_eq!(last.label, "d");
    assert_eq!(last.value, 15.0);
}
