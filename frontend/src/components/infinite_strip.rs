use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::models::Book;

/// Scroll position of the auto-advancing strip.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoScroll {
    offset: f64,
    speed: f64,
    item_width: f64,
    item_count: usize,
    hovered: bool,
}

impl AutoScroll {
    pub fn new(item_count: usize, item_width: f64, speed: f64) -> Self {
        Self {
            offset: 0.0,
            speed,
            item_width,
            item_count,
            hovered: false,
        }
    }

    #[cfg(test)]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Width of one logical copy of the list. Reaching it means the strip
    /// shows exactly what it showed at offset zero.
    pub fn loop_width(&self) -> f64 {
        self.item_width * self.item_count as f64
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn tick(&mut self) -> f64 {
        let loop_width = self.loop_width();
        if self.hovered || loop_width <= 0.0 {
            return self.offset;
        }
        self.offset += self.speed;
        if self.offset >= loop_width {
            self.offset = 0.0;
        }
        self.offset
    }

    /// Copies to render so at least one full copy trails past the viewport
    /// at the furthest offset. Never fewer than three.
    pub fn copies_for_viewport(&self, viewport_width: f64) -> usize {
        let loop_width = self.loop_width();
        if loop_width <= 0.0 {
            return 3;
        }
        let needed = (viewport_width / loop_width).ceil().max(0.0) as usize + 2;
        needed.max(3)
    }
}

/// Render-only repetition of `items`. Each entry carries `(copy, index)` so
/// keys stay unique across copies; the source slice is never duplicated.
pub fn tile<T>(items: &[T], copies: usize) -> impl Iterator<Item = (usize, usize, &T)> {
    (0..copies).flat_map(move |copy| {
        items
            .iter()
            .enumerate()
            .map(move |(index, item)| (copy, index, item))
    })
}

type FrameCallback = Closure<dyn FnMut()>;

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

#[derive(Properties, PartialEq)]
pub struct InfiniteBookStripProps {
    pub books: Rc<Vec<Book>>,
}

#[function_component(InfiniteBookStrip)]
pub fn infinite_book_strip(props: &InfiniteBookStripProps) -> Html {
    let container = use_node_ref();
    let scroll = use_mut_ref(|| AutoScroll::new(0, config::STRIP_CARD_WIDTH, config::STRIP_SPEED));

    {
        let container = container.clone();
        let scroll = scroll.clone();
        use_effect_with_deps(
            move |books: &Rc<Vec<Book>>| {
                *scroll.borrow_mut() =
                    AutoScroll::new(books.len(), config::STRIP_CARD_WIDTH, config::STRIP_SPEED);

                let frame: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
                let handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));

                if !books.is_empty() {
                    let next = frame.clone();
                    let handle_inner = handle.clone();
                    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                        let offset = scroll.borrow_mut().tick();
                        if let Some(element) = container.cast::<Element>() {
                            element.scroll_to_with_x_and_y(offset, 0.0);
                        }
                        if let Some(callback) = next.borrow().as_ref() {
                            *handle_inner.borrow_mut() = request_frame(callback);
                        }
                    }) as Box<dyn FnMut()>));

                    if let Some(callback) = frame.borrow().as_ref() {
                        *handle.borrow_mut() = request_frame(callback);
                    }
                }

                move || {
                    if let (Some(id), Some(window)) = (handle.borrow_mut().take(), window()) {
                        let _ = window.cancel_animation_frame(id);
                    }
                    // Breaks the frame -> closure -> frame cycle.
                    frame.borrow_mut().take();
                }
            },
            props.books.clone(),
        );
    }

    let on_enter = {
        let scroll = scroll.clone();
        Callback::from(move |_: MouseEvent| scroll.borrow_mut().set_hovered(true))
    };
    let on_leave = {
        let scroll = scroll.clone();
        Callback::from(move |_: MouseEvent| scroll.borrow_mut().set_hovered(false))
    };

    let viewport_width = window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let copies = AutoScroll::new(props.books.len(), config::STRIP_CARD_WIDTH, config::STRIP_SPEED)
        .copies_for_viewport(viewport_width);

    html! {
        <div class="strip-wrapper">
            <div class="strip-header">
                <span class="strip-badge">{"📚 BIBLIOTECA COMPLETA"}</span>
            </div>

            <div
                ref={container}
                class="strip-track"
                onmouseenter={on_enter}
                onmouseleave={on_leave}
            >
                { for tile(props.books.as_slice(), copies).map(|(copy, _, book)| html! {
                    <div key={format!("{}-{}", book.id, copy)} class="strip-card">
                        <div class="strip-card-inner">
                            <img src={book.cover_image_url.clone()} alt={book.title.clone()} loading="lazy" />
                            <div class="strip-card-overlay">
                                <h3>{&book.title}</h3>
                                <p>{&book.summary}</p>
                            </div>
                            <div class="strip-card-dot" />
                        </div>
                    </div>
                }) }
            </div>

            <div class="strip-footer">
                <p>{format!("⚡ {} eBooks Premium de Oratória", props.books.len())}</p>
            </div>

            <style>
                {r#"
                .strip-wrapper {
                    width: 100vw;
                    position: relative;
                    left: 50%;
                    margin-left: -50vw;
                    overflow: hidden;
                    padding: 2rem 0;
                }
                .strip-header, .strip-footer {
                    text-align: center;
                    margin: 1rem 0;
                    color: #999;
                }
                .strip-badge {
                    background: rgba(212, 175, 55, 0.2);
                    color: #d4af37;
                    border: 1px solid rgba(212, 175, 55, 0.3);
                    border-radius: 999px;
                    padding: 0.5rem 1rem;
                    font-weight: bold;
                    font-size: 0.875rem;
                }
                .strip-track {
                    display: flex;
                    gap: 1rem;
                    overflow: hidden;
                    scroll-behavior: auto;
                    scrollbar-width: none;
                }
                .strip-track::-webkit-scrollbar {
                    display: none;
                }
                .strip-card {
                    flex-shrink: 0;
                    width: 10rem;
                    cursor: pointer;
                }
                @media (min-width: 640px) {
                    .strip-card {
                        width: 12rem;
                    }
                }
                .strip-card-inner {
                    position: relative;
                    overflow: hidden;
                    border-radius: 8px;
                }
                .strip-card-inner img {
                    width: 100%;
                    height: 13rem;
                    object-fit: cover;
                    transition: transform 0.3s ease;
                }
                .strip-card:hover img {
                    transform: scale(1.1);
                }
                .strip-card-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 0.75rem;
                    background: linear-gradient(to top, rgba(10, 10, 10, 0.9), rgba(10, 10, 10, 0.2), transparent);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .strip-card:hover .strip-card-overlay {
                    opacity: 1;
                }
                .strip-card-overlay h3 {
                    font-size: 0.875rem;
                    margin: 0 0 0.25rem;
                }
                .strip-card-overlay p {
                    font-size: 0.75rem;
                    color: #999;
                    margin: 0;
                }
                .strip-card-dot {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.5rem;
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                    background: #d4af37;
                    animation: pulse 2s ease-in-out infinite;
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
    fn wraps_after_one_logical_width() {
        let (n, w, s) = (10usize, 200.0, 0.5);
        let mut scroll = AutoScroll::new(n, w, s);
        let ticks = (n as f64 * w / s).ceil() as usize;

        for _ in 0..ticks - 1 {
            scroll.tick();
        }
        assert!(scroll.offset() > 0.0);

        scroll.tick();
        assert!(scroll.offset() >= 0.0 && scroll.offset() < s);
    }

    #[test]
    fn wraps_with_increment_not_dividing_width() {
        let mut scroll = AutoScroll::new(3, 200.0, 7.0);
        let ticks = (600.0_f64 / 7.0).ceil() as usize;
        for _ in 0..ticks {
            scroll.tick();
        }
        assert!(scroll.offset() < 7.0);
    }

    #[test]
    fn hover_freezes_offset_until_exit() {
        let mut scroll = AutoScroll::new(4, 200.0, 0.5);
        for _ in 0..10 {
            scroll.tick();
        }
        let frozen = scroll.offset();

        scroll.set_hovered(true);
        for _ in 0..1000 {
            assert_eq!(scroll.tick(), frozen);
        }

        scroll.set_hovered(false);
        assert_eq!(scroll.tick(), frozen + 0.5);
    }

    #[test]
    fn empty_list_never_moves() {
        let mut scroll = AutoScroll::new(0, 200.0, 0.5);
        assert_eq!(scroll.tick(), 0.0);
        assert_eq!(scroll.loop_width(), 0.0);
    }

    #[test]
    fn renders_at_least_three_copies() {
        let scroll = AutoScroll::new(10, 200.0, 0.5);
        assert_eq!(scroll.copies_for_viewport(1280.0), 3);
        assert_eq!(scroll.copies_for_viewport(0.0), 3);

        // Two short items on a wide screen need more copies to cover it.
        let scroll = AutoScroll::new(2, 200.0, 0.5);
        assert_eq!(scroll.copies_for_viewport(1920.0), 7);
    }

    #[test]
    fn tile_repeats_without_touching_source() {
        let items = vec!["a", "b"];
        let tiled: Vec<(usize, usize, &&str)> = tile(&items, 3).collect();
        assert_eq!(tiled.len(), 6);
        assert_eq!(tiled[0], (0, 0, &"a"));
        assert_eq!(tiled[3], (1, 1, &"b"));
        assert_eq!(tiled[5], (2, 1, &"b"));
        assert_eq!(items.len(), 2);
    }
}
