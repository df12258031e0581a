use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::{MouseEvent, PointerEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::models::Book;

#[derive(Clone, Debug, PartialEq)]
pub enum CarouselAction {
    Next,
    Prev,
    /// 1-based slide to show.
    JumpTo(usize),
    /// Autoplay timer fired.
    Tick,
    StopAutoplay,
    SetCount(usize),
}

/// Paging state. `current` is 1-based.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    current: usize,
    count: usize,
    looping: bool,
    autoplay: bool,
}

impl CarouselState {
    pub fn new(count: usize, looping: bool) -> Self {
        Self {
            current: 1,
            count,
            looping,
            autoplay: true,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay && self.count > 1
    }

    pub fn next(&mut self) {
        if self.count == 0 {
            return;
        }
        if self.current < self.count {
            self.current += 1;
        } else if self.looping {
            self.current = 1;
        }
    }

    pub fn prev(&mut self) {
        if self.count == 0 {
            return;
        }
        if self.current > 1 {
            self.current -= 1;
        } else if self.looping {
            self.current = self.count;
        }
    }

    /// Wraps out-of-range targets when looping, clamps otherwise.
    pub fn jump_to(&mut self, index: usize) {
        if self.count == 0 {
            return;
        }
        self.current = if self.looping {
            (index as i64 - 1).rem_euclid(self.count as i64) as usize + 1
        } else {
            index.clamp(1, self.count)
        };
    }

    pub fn tick(&mut self) {
        if self.autoplay {
            self.next();
        }
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay = false;
    }

    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        self.current = self.current.clamp(1, count.max(1));
    }

    /// `(slide, is_current)` for each indicator dot.
    pub fn indicators(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (1..=self.count).map(move |slide| (slide, slide == self.current))
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CarouselAction::Next => {
                next.stop_autoplay();
                next.next();
            }
            CarouselAction::Prev => {
                next.stop_autoplay();
                next.prev();
            }
            CarouselAction::JumpTo(index) => {
                next.stop_autoplay();
                next.jump_to(index);
            }
            CarouselAction::Tick => next.tick(),
            CarouselAction::StopAutoplay => next.stop_autoplay(),
            CarouselAction::SetCount(count) => next.set_count(count),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Horizontal travel a drag needs before it pages.
const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Cards visible at once, matching the slide widths in the stylesheet.
pub fn slides_per_view(viewport_width: f64) -> usize {
    if viewport_width >= 1024.0 {
        3
    } else if viewport_width >= 768.0 {
        2
    } else {
        1
    }
}

/// Distinct track positions. The last one shows the final `per_view` cards
/// flush against the right edge, so no blank slots appear.
pub fn snap_count(slides: usize, per_view: usize) -> usize {
    if slides == 0 {
        return 0;
    }
    slides.saturating_sub(per_view.max(1)) + 1
}

/// Paging for a finished drag. Dragging left shows the next cards.
pub fn swipe_action(delta_x: f64) -> Option<CarouselAction> {
    if !delta_x.is_finite() || delta_x.abs() < SWIPE_THRESHOLD_PX {
        None
    } else if delta_x < 0.0 {
        Some(CarouselAction::Next)
    } else {
        Some(CarouselAction::Prev)
    }
}

#[derive(Properties, PartialEq)]
pub struct BookCarouselProps {
    pub books: Rc<Vec<Book>>,
    pub on_purchase: Callback<()>,
}

#[function_component(BookCarousel)]
pub fn book_carousel(props: &BookCarouselProps) -> Html {
    let (viewport_width, _) = use_window_size();
    let snaps = snap_count(props.books.len(), slides_per_view(viewport_width));
    let carousel = use_reducer(move || CarouselState::new(snaps, true));
    let drag_start = use_mut_ref(|| None::<f64>);

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |count: &usize| {
                dispatcher.dispatch(CarouselAction::SetCount(*count));
                || ()
            },
            snaps,
        );
    }

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |autoplaying: &bool| {
                let interval = if *autoplaying {
                    Some(Interval::new(config::CAROUSEL_AUTOPLAY_MS, move || {
                        dispatcher.dispatch(CarouselAction::Tick);
                    }))
                } else {
                    None
                };
                move || drop(interval)
            },
            carousel.is_autoplaying(),
        );
    }

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Prev))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };
    let stop_autoplay = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::StopAutoplay))
    };
    let on_drag_start = {
        let carousel = carousel.clone();
        let drag_start = drag_start.clone();
        Callback::from(move |e: PointerEvent| {
            carousel.dispatch(CarouselAction::StopAutoplay);
            *drag_start.borrow_mut() = Some(e.client_x() as f64);
        })
    };
    let on_drag_end = {
        let carousel = carousel.clone();
        let drag_start = drag_start.clone();
        Callback::from(move |e: PointerEvent| {
            let start = drag_start.borrow_mut().take();
            if let Some(action) = start.and_then(|x| swipe_action(e.client_x() as f64 - x)) {
                carousel.dispatch(action);
            }
        })
    };
    let on_drag_cancel = {
        let drag_start = drag_start.clone();
        Callback::from(move |_: PointerEvent| {
            drag_start.borrow_mut().take();
        })
    };
    let purchase = {
        let on_purchase = props.on_purchase.clone();
        Callback::from(move |_: MouseEvent| on_purchase.emit(()))
    };

    html! {
        <div class="carousel">
            <div class="carousel-header">
                <span class="carousel-badge">{"📚 BIBLIOTECA COMPLETA DE ORATÓRIA"}</span>
                <h2>{"Sua "}<span class="gold">{"Transformação"}</span>{" Começa Aqui"}</h2>
                <p>{"10 livros estrategicamente selecionados para você dominar a arte da comunicação persuasiva"}</p>
            </div>

            <div
                class="carousel-viewport"
                onmouseenter={stop_autoplay}
                onpointerdown={on_drag_start}
                onpointerup={on_drag_end}
                onpointerleave={on_drag_cancel.clone()}
                onpointercancel={on_drag_cancel}
            >
                <div
                    class="carousel-track"
                    style={format!("--carousel-index: {};", carousel.current().saturating_sub(1))}
                >
                    { for props.books.iter().enumerate().map(|(position, book)| html! {
                        <div key={book.id} class="carousel-slide">
                            <div class="carousel-card">
                                <div class="carousel-cover">
                                    <img src={book.cover_image_url.clone()} alt={book.title.clone()} loading="lazy" />
                                    <span class="carousel-number">{Book::badge(position)}</span>
                                    <div class="carousel-stars">{"★★★★★"}</div>
                                </div>
                                <div class="carousel-info">
                                    <span class="carousel-tag">{"📖 eBook Premium"}</span>
                                    <h3>{&book.title}</h3>
                                    <p>{&book.summary}</p>
                                    <div class="carousel-access">{"⚡ Acesso Imediato"}</div>
                                    <button class="carousel-included" onclick={purchase.clone()}>
                                        {"👑 Incluído no Pacote"}
                                    </button>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>

                <button class="carousel-arrow prev" onclick={on_prev} aria-label="Anterior">{"‹"}</button>
                <button class="carousel-arrow next" onclick={on_next} aria-label="Próximo">{"›"}</button>
            </div>

            <div class="carousel-counter">
                {format!("{} / {}", carousel.current(), carousel.count())}
            </div>

            <div class="carousel-dots">
                { for carousel.indicators().map(|(slide, is_current)| {
                    let onclick = {
                        let carousel = carousel.clone();
                        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::JumpTo(slide)))
                    };
                    html! {
                        <button
                            key={slide}
                            class={classes!("carousel-dot", is_current.then(|| "active"))}
                            {onclick}
                            aria-label={format!("Ir para slide {}", slide)}
                        />
                    }
                }) }
            </div>

            <div class="carousel-cta">
                <button class="cta-primary" onclick={purchase}>
                    {"👑 Quero Falar sem Medo ⚡"}
                </button>
                <p>{"⚡ Acesso instantâneo após o pagamento"}</p>
            </div>

            <style>
                {r#"
                .carousel {
                    max-width: 80rem;
                    margin: 0 auto;
                    position: relative;
                }
                .carousel-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .carousel-header h2 {
                    font-size: 2.5rem;
                    font-weight: 900;
                }
                .carousel-header p {
                    color: #999;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .carousel-badge, .carousel-tag {
                    color: #d4af37;
                    border: 1px solid rgba(212, 175, 55, 0.3);
                    border-radius: 999px;
                    padding: 0.25rem 0.75rem;
                }
                .carousel-viewport {
                    position: relative;
                    overflow: hidden;
                    touch-action: pan-y;
                    user-select: none;
                }
                .carousel-track {
                    display: flex;
                    transition: transform 0.5s ease;
                    transform: translateX(calc(var(--carousel-index) * -100%));
                }
                .carousel-slide {
                    flex: 0 0 100%;
                    padding-left: 1rem;
                    box-sizing: border-box;
                }
                @media (min-width: 768px) {
                    .carousel-slide { flex-basis: 50%; }
                    .carousel-track { transform: translateX(calc(var(--carousel-index) * -50%)); }
                }
                @media (min-width: 1024px) {
                    .carousel-slide { flex-basis: 33.3333%; }
                    .carousel-track { transform: translateX(calc(var(--carousel-index) * -33.3333%)); }
                }
                .carousel-card {
                    display: flex;
                    flex-direction: column;
                    height: 100%;
                    background: rgba(30, 30, 30, 0.5);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 12px;
                    overflow: hidden;
                }
                .carousel-cover {
                    position: relative;
                    aspect-ratio: 3 / 4;
                    overflow: hidden;
                }
                .carousel-cover img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .carousel-number {
                    position: absolute;
                    top: 0.75rem;
                    left: 0.75rem;
                    background: #d4af37;
                    color: #1a1a1a;
                    font-weight: bold;
                    padding: 0.25rem 0.75rem;
                    border-radius: 6px;
                }
                .carousel-stars {
                    position: absolute;
                    bottom: 0.75rem;
                    left: 0.75rem;
                    color: #d4af37;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .carousel-card:hover .carousel-stars,
                .carousel-card:hover .carousel-included {
                    opacity: 1;
                }
                .carousel-info {
                    padding: 1.5rem;
                }
                .carousel-info p {
                    color: #999;
                }
                .carousel-included {
                    width: 100%;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .carousel-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border: 2px solid rgba(212, 175, 55, 0.3);
                    background: rgba(26, 26, 26, 0.8);
                    color: #d4af37;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .carousel-arrow.prev { left: 0; }
                .carousel-arrow.next { right: 0; }
                .carousel-counter {
                    text-align: center;
                    margin-top: 1rem;
                    font-size: 0.875rem;
                    color: #999;
                }
                .carousel-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 2rem;
                }
                .carousel-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                    border: none;
                    background: rgba(255, 255, 255, 0.2);
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }
                .carousel-dot.active {
                    background: #d4af37;
                    transform: scale(1.25);
                }
                .carousel-cta {
                    text-align: center;
                    margin-top: 3rem;
                }
                .carousel-cta p {
                    color: #999;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_from_last_wraps_to_first_when_looping() {
        let mut state = CarouselState::new(5, true);
        state.jump_to(5);
        assert_eq!(state.current(), 5);
        state.next();
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn prev_from_first_wraps_to_last_when_looping() {
        let mut state = CarouselState::new(4, true);
        state.prev();
        assert_eq!(state.current(), 4);
    }

    #[test]
    fn non_looping_stops_at_edges() {
        let mut state = CarouselState::new(3, false);
        state.prev();
        assert_eq!(state.current(), 1);
        state.jump_to(3);
        state.next();
        assert_eq!(state.current(), 3);
    }

    #[test]
    fn jump_wraps_or_clamps() {
        let mut looping = CarouselState::new(4, true);
        looping.jump_to(6);
        assert_eq!(looping.current(), 2);
        looping.jump_to(0);
        assert_eq!(looping.current(), 4);

        let mut clamped = CarouselState::new(4, false);
        clamped.jump_to(9);
        assert_eq!(clamped.current(), 4);
        clamped.jump_to(0);
        assert_eq!(clamped.current(), 1);
    }

    #[test]
    fn autoplay_advances_until_stopped() {
        let mut state = CarouselState::new(3, true);
        state.tick();
        state.tick();
        assert_eq!(state.current(), 3);
        state.tick();
        assert_eq!(state.current(), 1);

        state.stop_autoplay();
        state.tick();
        assert_eq!(state.current(), 1);
        assert!(!state.is_autoplaying());
    }

    #[test]
    fn manual_navigation_stops_autoplay_permanently() {
        let state = Rc::new(CarouselState::new(3, true));
        let state = state.reduce(CarouselAction::Next);
        assert_eq!(state.current(), 2);
        assert!(!state.is_autoplaying());

        let state = state.reduce(CarouselAction::Tick);
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn hover_stop_keeps_position() {
        let state = Rc::new(CarouselState::new(3, true));
        let state = state.reduce(CarouselAction::Tick);
        let state = state.reduce(CarouselAction::StopAutoplay);
        assert_eq!(state.current(), 2);
        assert!(!state.is_autoplaying());
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut state = CarouselState::new(0, true);
        state.next();
        state.prev();
        state.jump_to(3);
        assert_eq!(state.current(), 1);
        assert_eq!(state.indicators().count(), 0);
        assert!(!state.is_autoplaying());
    }

    #[test]
    fn shrinking_count_clamps_current() {
        let mut state = CarouselState::new(10, true);
        state.jump_to(8);
        state.set_count(5);
        assert_eq!(state.current(), 5);
        assert_eq!(state.count(), 5);
    }

    #[test]
    fn indicators_mark_current_slide() {
        let mut state = CarouselState::new(3, true);
        state.jump_to(2);
        let dots: Vec<(usize, bool)> = state.indicators().collect();
        assert_eq!(dots, vec![(1, false), (2, true), (3, false)]);
    }

    #[test]
    fn snap_positions_follow_cards_per_view() {
        assert_eq!(slides_per_view(375.0), 1);
        assert_eq!(slides_per_view(768.0), 2);
        assert_eq!(slides_per_view(1280.0), 3);

        assert_eq!(snap_count(10, 1), 10);
        assert_eq!(snap_count(10, 2), 9);
        assert_eq!(snap_count(10, 3), 8);
        assert_eq!(snap_count(2, 3), 1);
        assert_eq!(snap_count(0, 3), 0);
    }

    #[test]
    fn last_desktop_snap_wraps_to_first() {
        let snaps = snap_count(10, slides_per_view(1440.0));
        let mut state = CarouselState::new(snaps, true);
        state.jump_to(snaps);
        assert_eq!(state.current(), 8);
        // Past the last snap the track would show blank slots; it loops instead.
        state.next();
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn drags_past_threshold_page() {
        assert_eq!(swipe_action(-120.0), Some(CarouselAction::Next));
        assert_eq!(swipe_action(80.0), Some(CarouselAction::Prev));
        assert_eq!(swipe_action(-SWIPE_THRESHOLD_PX), Some(CarouselAction::Next));
    }

    #[test]
    fn short_or_invalid_drags_are_clicks() {
        assert_eq!(swipe_action(0.0), None);
        assert_eq!(swipe_action(20.0), None);
        assert_eq!(swipe_action(-49.9), None);
        assert_eq!(swipe_action(f64::NAN), None);
    }

    #[test]
    fn drag_paging_stops_autoplay() {
        let state = Rc::new(CarouselState::new(5, true));
        let action = swipe_action(-200.0).unwrap();
        let next = state.reduce(action);
        assert_eq!(next.current(), 2);
        assert!(!next.is_autoplaying());
    }
}
