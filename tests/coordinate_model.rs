use egui::Pos2;
use graphic_solver::element::{Line, Point};
use graphic_solver::{Canvas, Config, GeometryError};

fn canvas() -> Canvas {
    Config::default().canvas()
}

#[test]
fn test_round_trip_is_identity() {
    let canvas = canvas();
    for x in (-1200..=1200).step_by(37) {
        for y in (-800..=800).step_by(41) {
            let (x, y) = (x as f32, y as f32);
            let original = Point::from_absolute(&canvas, x, y);
            let draw = original.draw_coord();
            let back = Point::from_draw(&canvas, draw.x, draw.y);
            assert_eq!(back.absolute(), Pos2::new(x, y));
            assert_eq!(back, original);
        }
    }
}

#[test]
fn test_round_trip_at_the_edge_of_exact_range() {
    let canvas = canvas();
    // 2^24 - 1 after adding the half-width
    let x = 16_777_215.0 - 1000.0;
    let y = -(16_777_215.0 - 600.0);
    let draw = Point::from_absolute(&canvas, x, y).draw_coord();
    assert_eq!(draw, Pos2::new(16_777_215.0, 16_777_215.0));
    assert_eq!(Point::from_draw(&canvas, draw.x, draw.y).absolute(), Pos2::new(x, y));
}

#[test]
fn test_points_outside_canvas_are_accepted() {
    let canvas = canvas();
    let point = Point::from_absolute(&canvas, 5000.0, -5000.0);
    assert_eq!(point.draw_coord(), Pos2::new(6000.0, 5600.0));
}

#[test]
fn test_line_arity() {
    let canvas = canvas();
    let a = Point::from_absolute(&canvas, 1.0, 2.0);
    let b = Point::from_absolute(&canvas, 3.0, 4.0);

    let line = Line::try_from([a, b].as_slice()).unwrap();
    assert_eq!(line, Line::new(a, b));

    let none: [Point; 0] = [];
    assert_eq!(
        Line::try_from(none.as_slice()),
        Err(GeometryError::InvalidArity { found: 0 })
    );
    assert_eq!(
        Line::try_from([a].as_slice()),
        Err(GeometryError::InvalidArity { found: 1 })
    );
    assert_eq!(
        Line::try_from([a, b, a].as_slice()),
        Err(GeometryError::InvalidArity { found: 3 })
    );
}

#[test]
fn test_hover_containment() {
    let config = Config::default();
    let radius = config.dimensions.point_radius;
    let point = Point::from_absolute(&config.canvas(), 0.0, 0.0);
    assert_eq!(point.draw_coord(), Pos2::new(1000.0, 600.0));

    assert!(point.info_at(Pos2::new(1000.0, 600.0), radius).is_some());
    assert!(point.info_at(Pos2::new(1000.0 + radius, 600.0), radius).is_some());
    assert!(point.info_at(Pos2::new(1000.0 + radius + 1.0, 600.0), radius).is_none());
}
