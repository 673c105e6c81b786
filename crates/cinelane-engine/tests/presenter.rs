use cinelane_engine::{Control, ListRegion, Presenter, Region, ViewEvent, ViewState, render};
use cinelane_testing::assertions::assert_surface_shows;
use cinelane_testing::fixtures::{catalog_of, sample_record};
use cinelane_testing::{RecordingSurface, SurfaceOp};
use cinelane_types::Catalog;

fn builtin_presenter() -> Presenter<RecordingSurface, Vec<ViewEvent>> {
    Presenter::new(Catalog::builtin(), RecordingSurface::new(), Vec::new())
}

#[test]
fn test_construction_renders_first_record() -> anyhow::Result<()> {
    let presenter = builtin_presenter();

    assert_eq!(presenter.index(), 0);
    assert_eq!(presenter.current().title, "Michael Clayton");
    assert_surface_shows(presenter.surface(), &Catalog::builtin()[0])?;

    Ok(())
}

#[test]
fn test_advance_to_thief_then_wrap() -> anyhow::Result<()> {
    let mut presenter = builtin_presenter();

    assert_eq!(presenter.advance(), 1);
    let surface = presenter.surface();
    assert_eq!(surface.text(Region::Title), Some("Thief"));
    assert_eq!(surface.text(Region::ImdbScore), Some("7.4"));
    assert_eq!(surface.lane().len(), 5);
    assert_eq!(surface.lane()[0].0, "Manhunter");

    assert_eq!(presenter.advance(), 0);
    assert_eq!(presenter.current().title, "Michael Clayton");
    assert_surface_shows(presenter.surface(), &Catalog::builtin()[0])?;

    Ok(())
}

#[test]
fn test_play_reports_provider_without_moving() {
    let mut presenter = builtin_presenter();
    presenter.advance();

    presenter.play_current();

    assert_eq!(presenter.index(), 1);
    assert_eq!(
        presenter.events().as_slice(),
        &[ViewEvent::PlaybackRequested {
            provider: "Criterion".to_string()
        }]
    );
}

#[test]
fn test_play_does_not_touch_surface() {
    let mut presenter = builtin_presenter();
    let ops_before = presenter.surface().ops().len();

    presenter.play_current();

    assert_eq!(presenter.surface().ops().len(), ops_before);
}

#[test]
fn test_shuffle_lane_matches_advance() {
    let catalog = catalog_of(5);
    let mut by_next = Presenter::new(catalog.clone(), RecordingSurface::new(), Vec::<ViewEvent>::new());
    let mut by_shuffle = Presenter::new(catalog, RecordingSurface::new(), Vec::<ViewEvent>::new());

    for _ in 0..7 {
        let a = by_next.advance();
        let b = by_shuffle.shuffle_lane();
        assert_eq!(a, b);
        assert_eq!(by_next.surface().ops(), by_shuffle.surface().ops());
    }
}

#[test]
fn test_dispatch_routes_controls() {
    let mut presenter = builtin_presenter();

    presenter.dispatch(Control::NextRecommendation);
    assert_eq!(presenter.index(), 1);

    presenter.dispatch(Control::ShuffleLane);
    assert_eq!(presenter.index(), 0);

    presenter.dispatch(Control::Play);
    assert_eq!(presenter.index(), 0);
    assert_eq!(presenter.events().len(), 1);
    assert_eq!(presenter.events()[0].to_string(), "Prototype action: open Max");
}

#[test]
fn test_k_advances_from_any_start() -> anyhow::Result<()> {
    for len in 1..=5 {
        let catalog = catalog_of(len);
        for start in 0..len {
            let mut presenter = Presenter::starting_at(
                catalog.clone(),
                start,
                RecordingSurface::new(),
                Vec::<ViewEvent>::new(),
            )
            .expect("start in range");

            for k in 1..=(2 * len) {
                presenter.advance();
                let expected = (start + k) % len;
                assert_eq!(presenter.index(), expected);
                assert_surface_shows(presenter.surface(), &catalog[expected])?;
            }
        }
    }

    Ok(())
}

#[test]
fn test_starting_at_renders_that_record() -> anyhow::Result<()> {
    let catalog = catalog_of(3);
    let presenter =
        Presenter::starting_at(catalog.clone(), 2, RecordingSurface::new(), Vec::<ViewEvent>::new())
            .expect("start in range");

    assert_eq!(presenter.index(), 2);
    assert_surface_shows(presenter.surface(), &catalog[2])?;
    Ok(())
}

#[test]
fn test_starting_at_checks_this_catalog() {
    // A start that is valid for a longer catalog must still be refused.
    assert!(ViewState::starting_at(3, 5).is_some());

    let presenter = Presenter::starting_at(
        catalog_of(2),
        3,
        RecordingSurface::new(),
        Vec::<ViewEvent>::new(),
    );
    assert!(presenter.is_none());

    let presenter = Presenter::starting_at(
        catalog_of(2),
        2,
        RecordingSurface::new(),
        Vec::<ViewEvent>::new(),
    );
    assert!(presenter.is_none());
}

#[test]
fn test_len_advances_return_to_start() {
    let catalog = catalog_of(4);
    let mut presenter =
        Presenter::starting_at(catalog, 2, RecordingSurface::new(), Vec::<ViewEvent>::new())
            .expect("start in range");

    for _ in 0..4 {
        presenter.advance();
    }

    assert_eq!(presenter.index(), 2);
}

#[test]
fn test_independent_presenters_do_not_share_state() {
    let mut first = builtin_presenter();
    let second = builtin_presenter();

    first.advance();

    assert_eq!(first.index(), 1);
    assert_eq!(second.index(), 0);
}

#[test]
fn test_render_replaces_stale_content() -> anyhow::Result<()> {
    let record = sample_record(3, 2);
    let mut surface = RecordingSurface::with_stale_content();

    render(&mut surface, &record);

    assert_surface_shows(&surface, &record)?;
    Ok(())
}

#[test]
fn test_render_clears_lists_before_refill() {
    let record = sample_record(7, 3);
    let mut surface = RecordingSurface::new();

    render(&mut surface, &record);

    let ops = surface.ops();
    let clear_reasons = ops
        .iter()
        .position(|op| *op == SurfaceOp::ClearList(ListRegion::Reasons))
        .expect("reasons cleared");
    let clear_lane = ops
        .iter()
        .position(|op| *op == SurfaceOp::ClearList(ListRegion::Lane))
        .expect("lane cleared");

    let reason_pushes: Vec<usize> = ops
        .iter()
        .enumerate()
        .filter(|(_, op)| matches!(op, SurfaceOp::PushReason(_)))
        .map(|(i, _)| i)
        .collect();
    let card_pushes: Vec<usize> = ops
        .iter()
        .enumerate()
        .filter(|(_, op)| matches!(op, SurfaceOp::PushLaneCard(..)))
        .map(|(i, _)| i)
        .collect();

    assert_eq!(reason_pushes.len(), 3);
    assert_eq!(card_pushes.len(), 3);
    assert!(reason_pushes.iter().all(|&i| i > clear_reasons));
    assert!(card_pushes.iter().all(|&i| i > clear_lane));
}

#[test]
fn test_render_with_empty_lists_leaves_them_empty() {
    let record = sample_record(1, 0);
    let mut surface = RecordingSurface::with_stale_content();

    render(&mut surface, &record);

    assert!(surface.reasons().is_empty());
    assert!(surface.lane().is_empty());
}

#[test]
fn test_presenter_render_keeps_index() -> anyhow::Result<()> {
    let mut presenter = builtin_presenter();
    let other = sample_record(9, 1);

    presenter.render(&other);

    assert_eq!(presenter.index(), 0);
    assert_surface_shows(presenter.surface(), &other)?;
    Ok(())
}

#[test]
fn test_channel_sink_receives_playback() {
    let (tx, rx) = std::sync::mpsc::channel::<ViewEvent>();
    let mut presenter = Presenter::new(Catalog::builtin(), RecordingSurface::new(), tx);

    presenter.dispatch(Control::NextRecommendation);
    presenter.dispatch(Control::Play);

    let event = rx.try_recv().expect("event delivered");
    assert_eq!(
        event,
        ViewEvent::PlaybackRequested {
            provider: "Criterion".to_string()
        }
    );
}
