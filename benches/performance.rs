use chesstrain::config::ThemeConfig;
use chesstrain::fixtures;
use chesstrain::i18n::{Lang, Trans};
use chesstrain::insight::{boards, Answer, InsightVm};
use chesstrain::nav::{self, KeyboardController};
use chesstrain::puzzle::{feedback, Feedback, FeedbackProps, PuzzleActions, PuzzleCtrl, ViewMode};
use chesstrain::tui::Renderer;
use chesstrain::types::Color;
use chesstrain::vdom::WidgetStore;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn create_ctrl() -> PuzzleCtrl {
    PuzzleCtrl::new(fixtures::sample_puzzle()).expect("fixture puzzle is valid")
}

/// Benchmark building the view trees
fn bench_views(c: &mut Criterion) {
    let trans = Trans::new(Lang::En);
    let vm = InsightVm {
        answer: Some(Answer {
            games: fixtures::sample_games(),
        }),
    };
    let actions = PuzzleActions::noop();

    let mut group = c.benchmark_group("views");

    group.bench_function("feedback_good", |b| {
        let props = FeedbackProps {
            mode: ViewMode::Play,
            last_feedback: Feedback::Good,
            pov: Color::White,
            can_view_solution: true,
        };
        b.iter(|| feedback::render(black_box(&props), &actions, &trans, || None))
    });

    group.bench_function("game_sample_boards", |b| {
        b.iter(|| boards::render(black_box(&vm), &trans))
    });

    group.finish();
}

/// Benchmark keyboard navigation over the puzzle tree
fn bench_navigation(c: &mut Criterion) {
    let ctrl = create_ctrl();

    let mut group = c.benchmark_group("navigation");

    group.bench_function("last_path", |b| {
        b.iter(|| nav::last_path(black_box(&ctrl.nav_state())))
    });

    group.bench_function("first_then_last", |b| {
        b.iter_batched(
            create_ctrl,
            |mut ctrl| {
                nav::first(&mut ctrl);
                nav::last(&mut ctrl);
                ctrl
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

/// Benchmark laying out the game sample with its mini-boards
fn bench_renderer(c: &mut Criterion) {
    let trans = Trans::new(Lang::En);
    let vm = InsightVm {
        answer: Some(Answer {
            games: fixtures::sample_games(),
        }),
    };
    let tree = boards::render(&vm, &trans).expect("answer is present");
    let theme = ThemeConfig::default();

    let mut group = c.benchmark_group("renderer");

    group.bench_function("layout_mounted", |b| {
        let mut renderer = Renderer::new();
        let mut widgets = WidgetStore::new();
        b.iter(|| renderer.layout(black_box(&tree), &mut widgets, &theme))
    });

    group.finish();
}

criterion_group!(benches, bench_views, bench_navigation, bench_renderer);
criterion_main!(benches);
