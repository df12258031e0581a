use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew::AttrValue;

use crate::config;
use crate::media::autoplay::AutoplayPolicy;
use crate::media::controller::use_media_controller;
use crate::media::state::format_time;
use crate::visibility::{use_in_view, InViewOptions};

#[derive(Properties, PartialEq)]
pub struct VideoPlayerProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_play: Callback<()>,
    #[prop_or(true)]
    pub show_controls: bool,
    /// Start playing once most of the player scrolls into view.
    #[prop_or_default]
    pub play_on_intersect: bool,
    /// With `play_on_intersect`, autoplay at most once per mount.
    #[prop_or_default]
    pub play_once_only: bool,
    /// Every increment pauses the player if it is playing.
    #[prop_or_default]
    pub pause_signal: u32,
}

#[function_component(VideoPlayer)]
pub fn video_player(props: &VideoPlayerProps) -> Html {
    let policy = {
        let play_once_only = props.play_once_only;
        let initial_signal = props.pause_signal;
        use_mut_ref(move || AutoplayPolicy::new(play_once_only, initial_signal))
    };
    let on_play = {
        let policy = policy.clone();
        let on_play = props.on_play.clone();
        Callback::from(move |_| {
            policy.borrow_mut().on_play_started();
            on_play.emit(());
        })
    };
    let on_rejected = {
        let policy = policy.clone();
        Callback::from(move |_| policy.borrow_mut().on_play_rejected())
    };
    let controller = use_media_controller(on_play, on_rejected);
    let wrapper = use_node_ref();
    let in_view = use_in_view(
        wrapper.clone(),
        InViewOptions {
            threshold: config::AUTOPLAY_THRESHOLD,
            trigger_once: false,
        },
    );
    let controls_visible = use_state_eq(|| true);
    let hide_timeout = use_mut_ref(|| None::<Timeout>);
    let is_playing = controller.state.is_playing;

    {
        let policy = policy.clone();
        let play = controller.play.clone();
        let enabled = props.play_on_intersect;
        use_effect_with_deps(
            move |visible: &bool| {
                if enabled && policy.borrow_mut().on_visibility(*visible, is_playing) {
                    log::info!("Autoplaying video scrolled into view");
                    play.emit(());
                }
                || ()
            },
            in_view,
        );
    }

    {
        let policy = policy.clone();
        let pause = controller.pause.clone();
        let active = controller.is_active();
        use_effect_with_deps(
            move |signal: &u32| {
                if policy.borrow_mut().on_pause_signal(*signal, active) {
                    pause.emit(());
                }
                || ()
            },
            props.pause_signal,
        );
    }

    let on_mouse_move = {
        let controls_visible = controls_visible.clone();
        let hide_timeout = hide_timeout.clone();
        let show_controls = props.show_controls;
        Callback::from(move |_: MouseEvent| {
            if !show_controls {
                return;
            }
            controls_visible.set(true);
            // Dropping the previous timeout cancels it.
            hide_timeout.borrow_mut().take();
            if is_playing {
                let controls_visible = controls_visible.clone();
                *hide_timeout.borrow_mut() = Some(Timeout::new(config::CONTROLS_HIDE_MS, move || {
                    controls_visible.set(false);
                }));
            }
        })
    };

    let on_mouse_leave = {
        let controls_visible = controls_visible.clone();
        let show_controls = props.show_controls;
        Callback::from(move |_: MouseEvent| {
            if is_playing && show_controls {
                controls_visible.set(false);
            }
        })
    };

    let state = &*controller.state;

    html! {
        <div
            ref={wrapper}
            class={classes!("video-player", props.class.clone())}
            onmousemove={on_mouse_move}
            onmouseleave={on_mouse_leave}
        >
            <video
                ref={controller.node.clone()}
                src={props.src.clone()}
                class="video-element"
                playsinline=true
                preload="metadata"
                onclick={controller.toggle_play.clone()}
            />

            {
                if !state.is_playing {
                    html! {
                        <div class="video-overlay">
                            <button class="video-big-play" onclick={controller.toggle_play.clone()} aria-label="Reproduzir vídeo">
                                {
                                    if state.is_loading {
                                        html! { <div class="video-spinner" /> }
                                    } else {
                                        html! { <span class="video-big-play-icon">{"▶"}</span> }
                                    }
                                }
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            {
                if props.show_controls {
                    html! {
                        <div class={classes!("video-controls", (!*controls_visible).then(|| "hidden"))}>
                            <div ref={controller.seek_bar.clone()} class="video-progress" onclick={controller.seek.clone()}>
                                <div class="video-progress-fill" style={format!("width: {}%;", state.progress_percent)}>
                                    <div class="video-progress-thumb" />
                                </div>
                            </div>
                            <div class="video-controls-row">
                                <div class="video-controls-left">
                                    <button class="video-control-button round" onclick={controller.toggle_play.clone()}>
                                        {if state.is_playing { "❚❚" } else { "▶" }}
                                    </button>
                                    <button class="video-control-button" onclick={controller.toggle_mute.clone()}>
                                        {if state.is_muted { "🔇" } else { "🔊" }}
                                    </button>
                                    {
                                        if !state.is_playing {
                                            html! {
                                                <span class="video-time">
                                                    {format!("{} / {}", format_time(state.current_time_seconds), format_time(state.duration_seconds))}
                                                </span>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                                <button class="video-control-button" onclick={controller.toggle_fullscreen.clone()} aria-label="Tela cheia">
                                    {"⛶"}
                                </button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .video-player {
                    position: relative;
                }
                .video-element {
                    width: 100%;
                    height: auto;
                    min-height: 250px;
                    max-height: 600px;
                    border-radius: 12px;
                    cursor: pointer;
                    display: block;
                }
                .video-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.3);
                    border-radius: 12px;
                }
                .video-big-play {
                    width: 5rem;
                    height: 5rem;
                    border-radius: 50%;
                    border: none;
                    background: rgba(212, 175, 55, 0.9);
                    color: #1a1a1a;
                    font-size: 2rem;
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: transform 0.3s ease;
                    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.5);
                }
                .video-big-play:hover {
                    transform: scale(1.1);
                }
                .video-spinner {
                    width: 2rem;
                    height: 2rem;
                    border: 3px solid #1a1a1a;
                    border-top-color: transparent;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                .video-controls {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 1rem;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.4), transparent);
                    border-radius: 0 0 12px 12px;
                    transition: opacity 0.3s ease;
                }
                .video-controls.hidden {
                    opacity: 0;
                }
                .video-progress {
                    height: 8px;
                    background: rgba(255, 255, 255, 0.2);
                    border-radius: 4px;
                    cursor: pointer;
                    margin-bottom: 0.75rem;
                    overflow: hidden;
                }
                .video-progress-fill {
                    height: 100%;
                    background: #d4af37;
                    border-radius: 4px;
                    position: relative;
                    transition: width 0.15s ease;
                }
                .video-controls-row,
                .video-controls-left {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    color: #fff;
                }
                .video-controls-row {
                    justify-content: space-between;
                }
                .video-control-button {
                    width: 2rem;
                    height: 2rem;
                    border: none;
                    border-radius: 8px;
                    background: rgba(255, 255, 255, 0.2);
                    color: #fff;
                    cursor: pointer;
                }
                .video-control-button.round {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                }
                .video-time {
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </div>
    }
}
