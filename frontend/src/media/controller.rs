use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, Element, Event, HtmlMediaElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::error::PlaybackError;
use crate::media::registry::{MediaId, MediaRegistry};
use crate::media::state::{bar_click, MediaEvent, MediaPlaybackState};

async fn play_element(element: &HtmlMediaElement) -> Result<(), PlaybackError> {
    let promise = element.play()?;
    JsFuture::from(promise).await?;
    Ok(())
}

/// Starts `node` after pausing every other registered player. A rejected
/// play leaves the state paused and clears the loading flag.
fn start_playback(
    node: &NodeRef,
    registry: &MediaRegistry,
    id: MediaId,
    dispatcher: UseReducerDispatcher<MediaPlaybackState>,
    pending: Rc<RefCell<bool>>,
    on_play: Callback<()>,
    on_rejected: Callback<()>,
) {
    let element = match node.cast::<HtmlMediaElement>() {
        Some(element) => element,
        None => {
            log::warn!("{}", PlaybackError::MissingElement);
            return;
        }
    };

    registry.pause_others(id);
    *pending.borrow_mut() = true;

    spawn_local(async move {
        let result = play_element(&element).await;
        *pending.borrow_mut() = false;
        match result {
            Ok(()) => {
                dispatcher.dispatch(MediaEvent::PlayStarted);
                on_play.emit(());
            }
            Err(e) => {
                log::error!("Error playing media: {}", e);
                dispatcher.dispatch(MediaEvent::PlayRejected);
                on_rejected.emit(());
            }
        }
    });
}

/// Handle returned by [`use_media_controller`]. Attach `node` to the
/// `<audio>`/`<video>` element and `seek_bar` to the clickable progress bar.
pub struct MediaController {
    pub node: NodeRef,
    pub seek_bar: NodeRef,
    pub state: UseReducerHandle<MediaPlaybackState>,
    pub play: Callback<()>,
    pub pause: Callback<()>,
    pub toggle_play: Callback<MouseEvent>,
    pub seek: Callback<MouseEvent>,
    pub toggle_mute: Callback<MouseEvent>,
    pub toggle_fullscreen: Callback<MouseEvent>,
    pending: Rc<RefCell<bool>>,
}

impl MediaController {
    /// Playing, or a play request is still settling.
    pub fn is_active(&self) -> bool {
        self.state.is_playing || *self.pending.borrow()
    }
}

#[hook]
pub fn use_media_controller(on_play: Callback<()>, on_rejected: Callback<()>) -> MediaController {
    let node = use_node_ref();
    let seek_bar = use_node_ref();
    let state = use_reducer(MediaPlaybackState::default);
    let registry = use_context::<MediaRegistry>().unwrap_or_default();
    let id = {
        let registry = registry.clone();
        *use_state(move || registry.allocate_id())
    };
    let pending = use_mut_ref(|| false);

    {
        let registry = registry.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let registration = node
                    .cast::<HtmlMediaElement>()
                    .map(|element| registry.register(id, Rc::new(element)));
                move || drop(registration)
            },
            node.clone(),
        );
    }

    {
        let state = state.clone();
        use_event(node.clone(), "loadstart", move |_: Event| {
            state.dispatch(MediaEvent::LoadStart);
        });
    }
    {
        let state = state.clone();
        let media = node.clone();
        use_event(node.clone(), "loadedmetadata", move |_: Event| {
            if let Some(element) = media.cast::<HtmlMediaElement>() {
                state.dispatch(MediaEvent::Metadata {
                    duration: element.duration(),
                });
            }
        });
    }
    {
        let state = state.clone();
        use_event(node.clone(), "canplay", move |_: Event| {
            state.dispatch(MediaEvent::CanPlay);
        });
    }
    {
        let state = state.clone();
        let media = node.clone();
        use_event(node.clone(), "timeupdate", move |_: Event| {
            if let Some(element) = media.cast::<HtmlMediaElement>() {
                state.dispatch(MediaEvent::TimeUpdate {
                    current_time: element.current_time(),
                    duration: element.duration(),
                });
            }
        });
    }
    {
        let state = state.clone();
        use_event(node.clone(), "play", move |_: Event| {
            state.dispatch(MediaEvent::PlayStarted);
        });
    }
    {
        let state = state.clone();
        use_event(node.clone(), "pause", move |_: Event| {
            state.dispatch(MediaEvent::Paused);
        });
    }
    {
        let state = state.clone();
        use_event(node.clone(), "ended", move |_: Event| {
            state.dispatch(MediaEvent::Ended);
        });
    }

    let play = {
        let node = node.clone();
        let registry = registry.clone();
        let dispatcher = state.dispatcher();
        let pending = pending.clone();
        Callback::from(move |_: ()| {
            start_playback(
                &node,
                &registry,
                id,
                dispatcher.clone(),
                pending.clone(),
                on_play.clone(),
                on_rejected.clone(),
            );
        })
    };

    let pause = {
        let node = node.clone();
        let state = state.clone();
        Callback::from(move |_: ()| {
            if let Some(element) = node.cast::<HtmlMediaElement>() {
                if let Err(e) = element.pause() {
                    log::warn!("Failed to pause media: {:?}", e);
                }
            }
            state.dispatch(MediaEvent::Paused);
        })
    };

    let toggle_play = {
        let is_playing = state.is_playing;
        let play = play.clone();
        let pause = pause.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if is_playing {
                pause.emit(());
            } else {
                play.emit(());
            }
        })
    };

    let seek = {
        let node = node.clone();
        let seek_bar = seek_bar.clone();
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(bar) = seek_bar.cast::<Element>() else {
                return;
            };
            let rect = bar.get_bounding_client_rect();
            let (click_x, width) = bar_click(e.client_x() as f64, rect.left(), rect.width());
            if let (Some(element), Some(target)) = (
                node.cast::<HtmlMediaElement>(),
                state.seek_target(click_x, width),
            ) {
                element.set_current_time(target);
                state.dispatch(MediaEvent::Seek { click_x, width });
            }
        })
    };

    let toggle_mute = {
        let node = node.clone();
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if let Some(element) = node.cast::<HtmlMediaElement>() {
                let mut toggled = (*state).clone();
                toggled.apply(MediaEvent::ToggleMute);
                element.set_volume(toggled.effective_volume());
                state.dispatch(MediaEvent::ToggleMute);
            }
        })
    };

    let toggle_fullscreen = {
        let node = node.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let document = match window().and_then(|w| w.document()) {
                Some(document) => document,
                None => return,
            };
            if document.fullscreen_element().is_some() {
                document.exit_fullscreen();
            } else if let Some(element) = node.cast::<Element>() {
                if let Err(e) = element.request_fullscreen() {
                    log::warn!("Fullscreen request denied: {:?}", e);
                }
            }
        })
    };

    MediaController {
        node,
        seek_bar,
        state,
        play,
        pause,
        toggle_play,
        seek,
        toggle_mute,
        toggle_fullscreen,
        pending,
    }
}
