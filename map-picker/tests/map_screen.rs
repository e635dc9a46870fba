use approx::assert_abs_diff_eq;
use map_picker::host::{EditText, NavigationLog, Screen, TextField};
use map_picker::surface::{
    EventPropagation, EventSubscription, MapEvent, MapSurface, RecordingSurface, SurfaceOp,
};
use map_picker::{
    Coordinate, InvalidInputPolicy, MapScreen, Marker, PickerConfig, PickerError, ScreenState,
};

type TestScreen = MapScreen<RecordingSurface, EditText>;

fn ready_screen_with(config: PickerConfig) -> (TestScreen, NavigationLog) {
    let navigation = NavigationLog::default();
    let (mut screen, request) = TestScreen::create(
        EditText::default(),
        EditText::default(),
        navigation.clone(),
        config,
    );
    assert!(request.resolve(RecordingSurface::default()).is_ok());
    assert_eq!(screen.poll_surface().ok(), Some(ScreenState::Ready));
    (screen, navigation)
}

fn ready_screen() -> TestScreen {
    ready_screen_with(PickerConfig::default()).0
}

fn surface(screen: &TestScreen) -> &RecordingSurface {
    screen.surface().expect("surface is attached")
}

fn type_coordinates(screen: &mut TestScreen, latitude: &str, longitude: &str) {
    screen.latitude_field_mut().set_text(latitude);
    screen.longitude_field_mut().set_text(longitude);
}

#[test]
fn surface_ready_shows_default_marker() {
    let screen = ready_screen();
    let markers = surface(&screen).markers();

    assert_eq!(markers.len(), 1);
    assert_eq!(
        markers[0].position,
        Coordinate::new(19.8077463, -99.4077038)
    );
    assert_eq!(markers[0].title.as_deref(), Some("Mexico"));
    assert_eq!(
        surface(&screen).camera(),
        Some(Coordinate::new(19.8077463, -99.4077038))
    );
}

#[test]
fn surface_ready_with_existing_markers_leaves_one() {
    let navigation = NavigationLog::default();
    let (mut screen, _request) = TestScreen::create(
        EditText::default(),
        EditText::default(),
        navigation,
        PickerConfig::default(),
    );

    let mut surface = RecordingSurface::default();
    surface.add_marker(Marker::new(Coordinate::new(0.0, 0.0)));
    screen.on_surface_ready(surface).expect("first surface");

    assert_eq!(screen.surface().map(|s| s.markers().len()), Some(1));
}

#[tokio::test]
async fn waiting_for_surface_makes_screen_ready() {
    let (mut screen, request) = TestScreen::create(
        EditText::default(),
        EditText::default(),
        NavigationLog::default(),
        PickerConfig::default(),
    );

    let host = tokio::spawn(async move {
        assert!(request.resolve(RecordingSurface::default()).is_ok());
    });

    screen.wait_for_surface().await.expect("surface provided");
    host.await.expect("host task finished");

    assert_eq!(screen.state(), ScreenState::Ready);
    assert_eq!(surface(&screen).subscription(), EventSubscription::ALL);
    screen.wait_for_surface().await.expect("already ready");
}

#[tokio::test]
async fn waiting_for_dropped_request_fails() {
    let (mut screen, request) = TestScreen::create(
        EditText::default(),
        EditText::default(),
        NavigationLog::default(),
        PickerConfig::default(),
    );
    drop(request);

    assert!(matches!(
        screen.wait_for_surface().await,
        Err(PickerError::SurfaceRequestDropped)
    ));
    assert_eq!(screen.state(), ScreenState::AwaitingSurface);
}

#[test]
fn tap_moves_single_marker_and_fills_fields() {
    let mut screen = ready_screen();
    let taps = [
        Coordinate::new(19.4326, -99.1332),
        Coordinate::new(-33.8688, 151.2093),
        Coordinate::new(0.0, 0.0),
        Coordinate::new(-90.0, 180.0),
        Coordinate::new(51.5007292, -0.1246254),
    ];

    for position in taps {
        assert_eq!(
            screen.handle_event(&MapEvent::Tap(position)),
            EventPropagation::Stop
        );

        let markers = surface(&screen).markers();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].position, position);
        assert_eq!(markers[0].title, None);
        assert_eq!(surface(&screen).camera(), Some(position));

        let latitude: f64 = screen.latitude_field().text().parse().expect("number");
        let longitude: f64 = screen.longitude_field().text().parse().expect("number");
        assert_abs_diff_eq!(latitude, position.latitude);
        assert_abs_diff_eq!(longitude, position.longitude);
    }
}

#[test]
fn marker_count_never_exceeds_one() {
    let mut screen = ready_screen();
    screen
        .on_tap(Coordinate::new(10.0, 10.0))
        .expect("screen is ready");
    type_coordinates(&mut screen, "1.5", "2.5");
    screen
        .on_long_press(Coordinate::new(0.0, 0.0))
        .expect("screen is ready");
    screen
        .on_tap(Coordinate::new(20.0, 20.0))
        .expect("screen is ready");

    let mut shown = 0usize;
    for op in surface(&screen).ops() {
        match op {
            SurfaceOp::Clear => shown = 0,
            SurfaceOp::AddMarker(_) => shown += 1,
            _ => {}
        }
        assert!(shown <= 1);
    }
}

#[test]
fn long_press_places_marker_at_typed_coordinates() {
    let mut screen = ready_screen();
    type_coordinates(&mut screen, "19.4326", "-99.1332");

    let event_position = Coordinate::new(45.0, 45.0);
    assert_eq!(
        screen.handle_event(&MapEvent::LongPress(event_position)),
        EventPropagation::Stop
    );

    let expected = Coordinate::new(19.4326, -99.1332);
    let markers = surface(&screen).markers();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].position, expected);
    assert_eq!(markers[0].title.as_deref(), Some("Specified location"));
    assert_eq!(surface(&screen).camera(), Some(expected));
    assert_eq!(screen.latitude_field().error(), None);
}

#[test]
fn long_press_with_invalid_input_flags_both_fields() {
    let mut screen = ready_screen();
    type_coordinates(&mut screen, "abc", "-99.1332");
    let ops_before = surface(&screen).ops().to_vec();

    screen
        .on_long_press(Coordinate::new(0.0, 0.0))
        .expect("invalid input is not an error");

    assert_eq!(surface(&screen).ops(), ops_before.as_slice());
    assert_eq!(screen.latitude_field().error(), Some("Invalid latitude"));
    assert_eq!(screen.longitude_field().error(), Some("Invalid longitude"));
}

#[test]
fn long_press_with_invalid_input_flags_offending_field_when_configured() {
    let (mut screen, _) = ready_screen_with(PickerConfig {
        invalid_input: InvalidInputPolicy::MarkOffending,
        ..PickerConfig::default()
    });
    type_coordinates(&mut screen, "abc", "-99.1332");

    screen
        .on_long_press(Coordinate::new(0.0, 0.0))
        .expect("invalid input is not an error");

    assert_eq!(surface(&screen).markers()[0].title.as_deref(), Some("Mexico"));
    assert_eq!(screen.latitude_field().error(), Some("Invalid latitude"));
    assert_eq!(screen.longitude_field().error(), None);
}

#[test]
fn long_press_with_non_finite_input_leaves_map_unchanged() {
    for (latitude, longitude) in [("NaN", "inf"), ("19.4326", "-infinity"), ("Infinity", "0")] {
        let mut screen = ready_screen();
        type_coordinates(&mut screen, latitude, longitude);
        let ops_before = surface(&screen).ops().to_vec();

        screen
            .on_long_press(Coordinate::new(0.0, 0.0))
            .expect("invalid input is not an error");

        assert_eq!(surface(&screen).ops(), ops_before.as_slice());
        assert_eq!(surface(&screen).markers()[0].title.as_deref(), Some("Mexico"));
        assert_eq!(screen.latitude_field().error(), Some("Invalid latitude"));
        assert_eq!(screen.longitude_field().error(), Some("Invalid longitude"));
    }
}

#[test]
fn long_press_with_empty_fields_leaves_map_unchanged() {
    let mut screen = ready_screen();
    screen
        .on_long_press(Coordinate::new(0.0, 0.0))
        .expect("invalid input is not an error");

    assert_eq!(surface(&screen).markers().len(), 1);
    assert_eq!(surface(&screen).markers()[0].title.as_deref(), Some("Mexico"));
    assert!(screen.latitude_field().error().is_some());
}

#[test]
fn tap_after_invalid_input_clears_errors() {
    let mut screen = ready_screen();
    type_coordinates(&mut screen, "abc", "def");
    screen
        .on_long_press(Coordinate::new(0.0, 0.0))
        .expect("invalid input is not an error");

    screen
        .on_tap(Coordinate::new(1.0, 2.0))
        .expect("screen is ready");
    assert_eq!(screen.latitude_field().error(), None);
    assert_eq!(screen.longitude_field().error(), None);
}

#[test]
fn navigation_does_not_touch_map() {
    let (mut screen, navigation) = ready_screen_with(PickerConfig::default());
    let ops_before = surface(&screen).ops().to_vec();

    screen.navigate_to_other_screen();
    screen.navigate_to_other_screen();

    assert_eq!(navigation.launched(), vec![Screen::Location, Screen::Location]);
    assert_eq!(surface(&screen).ops(), ops_before.as_slice());
}

#[test]
fn custom_default_marker() {
    let madrid = Coordinate::new(40.4168, -3.7038);
    let (screen, _) = ready_screen_with(PickerConfig {
        default_marker: madrid,
        default_marker_title: "Madrid".to_owned(),
        ..PickerConfig::default()
    });

    let markers = surface(&screen).markers();
    assert_eq!(markers, &[Marker::new(madrid).with_title("Madrid")]);
}
