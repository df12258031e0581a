use std::f64::consts::PI;

use yew::prelude::*;
use yew::AttrValue;

use crate::media::controller::use_media_controller;
use crate::media::state::format_time;

const RING_RADIUS: f64 = 16.0;

/// `(dasharray, dashoffset)` for the circular progress ring.
pub fn ring_dash(progress_percent: f64) -> (f64, f64) {
    let circumference = 2.0 * PI * RING_RADIUS;
    let remaining = 1.0 - (progress_percent / 100.0).clamp(0.0, 1.0);
    (circumference, circumference * remaining)
}

#[derive(Properties, PartialEq)]
pub struct AudioPlayerProps {
    pub audio_url: AttrValue,
    pub book_title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Every increment asks the player to start, as if its button was pressed.
    #[prop_or_default]
    pub play_signal: u32,
}

#[function_component(AudioPlayer)]
pub fn audio_player(props: &AudioPlayerProps) -> Html {
    let controller = use_media_controller(Callback::noop(), Callback::noop());
    let state = &*controller.state;

    {
        let play = controller.play.clone();
        use_effect_with_deps(
            move |signal: &u32| {
                if *signal > 0 {
                    play.emit(());
                }
                || ()
            },
            props.play_signal,
        );
    }

    if props.audio_url.trim().is_empty() {
        return html! {};
    }

    let (dash_array, dash_offset) = ring_dash(state.progress_percent);
    let play_label = if state.is_playing {
        format!("Pausar prévia de {}", props.book_title)
    } else {
        format!("Ouvir prévia de {}", props.book_title)
    };

    html! {
        <div class={classes!("audio-player", props.class.clone())}>
            <audio ref={controller.node.clone()} src={props.audio_url.clone()} preload="metadata" />

            <div class="audio-controls">
                <div class="audio-button-wrap">
                    <button
                        class="audio-play-button"
                        onclick={controller.toggle_play.clone()}
                        disabled={state.is_loading}
                        aria-label={play_label}
                    >
                        {
                            if state.is_loading {
                                html! { <div class="audio-spinner" /> }
                            } else if state.is_playing {
                                html! { <span class="audio-icon">{"❚❚"}</span> }
                            } else {
                                html! { <span class="audio-icon play">{"▶"}</span> }
                            }
                        }
                        {
                            if state.duration_seconds > 0.0 {
                                html! {
                                    <svg class="audio-ring" viewBox="0 0 40 40">
                                        <circle cx="20" cy="20" r="16" fill="none" class="audio-ring-track" stroke-width="2" />
                                        <circle
                                            cx="20" cy="20" r="16" fill="none"
                                            class="audio-ring-progress"
                                            stroke-width="2"
                                            stroke-linecap="round"
                                            stroke-dasharray={dash_array.to_string()}
                                            stroke-dashoffset={dash_offset.to_string()}
                                        />
                                    </svg>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </button>
                </div>

                <div class="audio-meta">
                    <div ref={controller.seek_bar.clone()} class="audio-seek" onclick={controller.seek.clone()}>
                        <div class="audio-seek-fill" style={format!("width: {}%;", state.progress_percent)} />
                    </div>
                    <div class="audio-meta-row">
                        <span class="audio-time">
                            {format!("{} / {}", format_time(state.current_time_seconds), format_time(state.duration_seconds))}
                        </span>
                        <div class="audio-meta-actions">
                            {
                                if state.is_playing {
                                    html! {
                                        <div class="audio-bars">
                                            { for (0..3).map(|i| html! {
                                                <span
                                                    key={i.to_string()}
                                                    style={format!("height: {}px; animation-delay: {}s;", 4 + (i % 2) * 2, i as f64 * 0.15)}
                                                />
                                            }) }
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                            <button class="audio-mute" onclick={controller.toggle_mute.clone()}>
                                {if state.is_muted { "🔇" } else { "🔊" }}
                            </button>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .audio-player {
                    background: rgba(20, 20, 20, 0.6);
                    border: 1px solid rgba(212, 175, 55, 0.2);
                    border-radius: 8px;
                    padding: 0.5rem;
                }
                .audio-controls {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .audio-button-wrap {
                    position: relative;
                    flex-shrink: 0;
                }
                .audio-play-button {
                    position: relative;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    border: 2px solid rgba(212, 175, 55, 0.3);
                    background: rgba(212, 175, 55, 0.2);
                    color: #d4af37;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }
                .audio-play-button:hover {
                    transform: scale(1.05);
                }
                .audio-play-button:disabled {
                    opacity: 0.5;
                }
                .audio-spinner {
                    width: 1rem;
                    height: 1rem;
                    border: 2px solid #d4af37;
                    border-top-color: transparent;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                .audio-ring {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    transform: rotate(-90deg);
                }
                .audio-ring-track {
                    stroke: rgba(212, 175, 55, 0.2);
                }
                .audio-ring-progress {
                    stroke: #d4af37;
                    transition: stroke-dashoffset 0.15s ease-out;
                }
                .audio-meta {
                    flex: 1;
                }
                .audio-seek {
                    height: 4px;
                    background: rgba(255, 255, 255, 0.15);
                    border-radius: 2px;
                    cursor: pointer;
                    margin-bottom: 0.25rem;
                }
                .audio-seek-fill {
                    height: 100%;
                    background: #d4af37;
                    border-radius: 2px;
                }
                .audio-meta-row {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 0.5rem;
                }
                .audio-time {
                    font-size: 0.75rem;
                    color: #d4af37;
                }
                .audio-meta-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .audio-bars {
                    display: flex;
                    align-items: center;
                    gap: 2px;
                }
                .audio-bars span {
                    width: 2px;
                    background: #d4af37;
                    border-radius: 1px;
                    animation: pulse 0.6s ease-in-out infinite;
                }
                .audio-mute {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 0.75rem;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
        </div>
    }
}
