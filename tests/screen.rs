use ruler::data::geometry::{Point, Rect};
use ruler::data::screen::Screen;
use ruler::data::units::Orientation;

fn monitors() -> Vec<Screen> {
    let a = Rect::new(0.0, 0.0, 1920.0, 1080.0);
    let b = Rect::new(1920.0, 0.0, 1280.0, 1024.0);
    vec![
        Screen::from_dips(a, Rect::new(0.0, 0.0, 1920.0, 1040.0), 1.0).with_name("A", true),
        Screen::from_dips(b, b, 2.0).with_name("B", false),
    ]
}

#[test]
fn point_on_a_monitor() {
    let screens = monitors();
    let s = Screen::from_point(&screens, Point::new(2000.0, 10.0)).unwrap();
    assert_eq!(s.device_name, "B");
    assert_eq!(s.scale(Orientation::Vertical), 2.0);
    assert_eq!(s.bounds_pix.width, 2560.0);
}

#[test]
fn point_off_screen_picks_the_nearest() {
    let screens = monitors();
    let s = Screen::from_point(&screens, Point::new(-50.0, 10.0)).unwrap();
    assert_eq!(s.device_name, "A");
    let s = Screen::from_point(&screens, Point::new(3300.0, 500.0)).unwrap();
    assert_eq!(s.device_name, "B");
    assert!(Screen::from_point(&[], Point::new(0.0, 0.0)).is_none());
}

#[test]
fn window_uses_its_center() {
    let screens = monitors();
    let s = Screen::from_window(&screens, Rect::new(1700.0, 100.0, 800.0, 80.0)).unwrap();
    assert_eq!(s.device_name, "B");
    assert!(!s.primary);
}

#[test]
fn working_extent_uses_working_area() {
    let screens = monitors();
    assert_eq!(screens[0].working_extent(Orientation::Vertical), 1040.0);
    assert_eq!(screens[0].working_extent(Orientation::Horizontal), 1920.0);
}
