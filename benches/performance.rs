use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
};
use thai_datepicker::calendar::{CalendarDate, FixedClock};
use thai_datepicker::commands::calendar::format_calendar;
use thai_datepicker::config::Config;
use thai_datepicker::tui::widgets::{DayView, RenderableWidget, YearView};
use thai_datepicker::tui::{Action, App, FixedViewport, Theme};

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    match CalendarDate::from_ymd(y, m, d) {
        Ok(date) => date,
        Err(e) => panic!("bad bench date: {}", e),
    }
}

/// Benchmark the pure grid models
fn bench_view_models(c: &mut Criterion) {
    let today = date(2026, 10, 16);
    let min = Some(date(2026, 10, 5));
    let max = Some(date(2026, 12, 16));

    let mut group = c.benchmark_group("view_models");

    group.bench_function("day_cells", |b| {
        b.iter(|| {
            DayView::new(black_box(today), today)
                .selected(Some(today))
                .bounds(min, max)
                .cells()
        })
    });

    group.bench_function("year_cells", |b| {
        b.iter(|| YearView::new(black_box(today), today).cells())
    });

    group.bench_function("text_calendar", |b| {
        b.iter(|| format_calendar(black_box(today), today, min, max))
    });

    group.finish();
}

/// Benchmark rendering into a buffer
fn bench_rendering(c: &mut Criterion) {
    let today = date(2026, 10, 16);
    let theme = Theme::default();
    let area = Rect::new(0, 0, 28, 9);

    let mut group = c.benchmark_group("rendering");

    group.bench_function("day_view", |b| {
        let view = DayView::new(today, today).selected(Some(today));
        b.iter(|| {
            let mut buf = Buffer::empty(area);
            view.render(black_box(area), &mut buf, &theme);
            buf
        })
    });

    group.bench_function("demo_page_with_open_popup", |b| {
        let mut app = App::new(
            &Config::default(),
            Box::new(FixedViewport::new(100, 40)),
            Box::new(FixedClock(today)),
        );
        let screen = Rect::new(0, 0, 100, 40);
        // Lay out the triggers, then open the first picker so the popup is part of every frame
        app.render(screen, &mut Buffer::empty(screen));
        app.dispatch(Action::Click(Position::new(40, 4)));
        b.iter(|| {
            let mut buf = Buffer::empty(screen);
            app.render(black_box(screen), &mut buf);
            buf
        })
    });

    group.finish();
}

criterion_group!(benches, bench_view_models, bench_rendering);
criterion_main!(benches);
