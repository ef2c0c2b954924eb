use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_hunt::core::{Board, GameState, WordList};
use word_hunt::term::{FrameBuffer, GameView, Viewport};
use word_hunt::types::{Coord, GameAction};

const STOMP: [Coord; 5] = [
    Coord::new(1, 1),
    Coord::new(2, 2),
    Coord::new(1, 2),
    Coord::new(2, 1),
    Coord::new(3, 2),
];

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(Board::default(), WordList::builtin());

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16));
        })
    });
}

fn bench_drag_word(c: &mut Criterion) {
    c.bench_function("drag_and_submit_word", |b| {
        let mut state = GameState::new(Board::default(), WordList::builtin());
        b.iter(|| {
            state.apply_action(GameAction::Press(Some(STOMP[0])));
            for &coord in &STOMP[1..] {
                state.apply_action(GameAction::Drag(black_box(coord)));
            }
            state.apply_action(GameAction::Release);
        })
    });
}

fn bench_parse_words(c: &mut Criterion) {
    let text = "MAP\n100\nTAP\n100\nPROM ; star\n400\nPRESTO\n1400\n".repeat(64);
    c.bench_function("parse_word_list", |b| {
        b.iter(|| WordList::parse(black_box(&text)))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(Board::default(), WordList::builtin());
    state.apply_action(GameAction::Press(Some(STOMP[0])));
    state.apply_action(GameAction::Drag(STOMP[1]));
    let snap = state.snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_frame", |b| {
        b.iter(|| view.render_into(black_box(&snap), vp, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_drag_word,
    bench_parse_words,
    bench_render
);
criterion_main!(benches);
