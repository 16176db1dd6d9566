use approx::abs_diff_eq;
use box_series::api::{BoxModelInputs, FixedColor, LocaleLabelFormatter, recompute};
use box_series::core::{BandScale, LinearScale, SeriesGroup, ValueAxis};
use box_series::render::Color;
use proptest::prelude::*;

proptest! {
    #[test]
    fn box_geometry_stays_consistent_with_axes(
        values in prop::collection::vec(0.0f64..1_000.0, 1..64),
        range_height in 100.0f64..2_000.0,
        category_count in 1usize..8,
        pick in 0usize..8
    ) {
        let categories: Vec<String> = (0..category_count).map(|i| format!("g{i}")).collect();
        let name = categories[pick % category_count].clone();
        let band = BandScale::new(categories, 0.0, 800.0).expect("band scale");
        let linear = LinearScale::new(0.0, 1_000.0, range_height, 0.0).expect("linear scale");
        let group = SeriesGroup::from_values(name, &values);

        let model = recompute(BoxModelInputs {
            group: &group,
            category_axis: &band,
            value_axis: &linear,
            colors: &FixedColor(Color::rgb(0.5, 0.5, 0.5)),
            formatter: &LocaleLabelFormatter::default(),
            round_box_width: false,
        })
        .expect("recompute")
        .expect("non-empty");

        let q1_y = linear.value_to_pixel(model.quartiles.q1).expect("q1");
        let q3_y = linear.value_to_pixel(model.quartiles.q3).expect("q3");
        let median_y = linear.value_to_pixel(model.quartiles.median).expect("median");

        prop_assert!(abs_diff_eq!(model.height, (q1_y - q3_y).abs(), epsilon = 1e-9));
        prop_assert!(abs_diff_eq!(model.horizontal_lines[1].v1.y, median_y, epsilon = 1e-9));
        // inverted axis: the box top sits at or above the median, the whiskers outside the box
        prop_assert!(model.y <= median_y + 1e-9);
        prop_assert!(model.line_coordinates[3] <= model.y + 1e-9);
        prop_assert!(model.line_coordinates[1] + 1e-9 >= model.y + model.height);
        let center = model.line_coordinates[0];
        prop_assert!(abs_diff_eq!(center, model.x + model.width / 2.0, epsilon = 1e-9));
    }
}
