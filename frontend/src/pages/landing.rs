use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::checkout::open_checkout;
use crate::components::audio_player::AudioPlayer;
use crate::components::book_carousel::BookCarousel;
use crate::components::infinite_strip::InfiniteBookStrip;
use crate::components::video_player::VideoPlayer;
use crate::config;
use crate::content::load_books;
use crate::models::{benefits_for, Book};
use crate::pages::faq::Faq;
use crate::storage::hero_video_flag;
use crate::visibility::{use_scroll_reveal, RevealOptions};

const STATS: [(&str, &str, &str); 3] = [
    ("👥", "+50.000", "Pessoas"),
    ("⭐", "4.9/5", "Avaliação"),
    ("📖", "10", "eBooks"),
];

const GUARANTEES: [&str; 3] = ["Acesso Imediato", "Garantia 7 dias", "Suporte Completo"];

const BENEFITS: [(&str, &str, &str); 3] = [
    (
        "📈",
        "Metodologia Comprovada",
        "Técnicas testadas por milhares de oradores de sucesso ao redor do mundo",
    ),
    (
        "⚡",
        "Resultados Rápidos",
        "Veja melhorias significativas em sua comunicação em apenas 7 dias",
    ),
    (
        "🛡️",
        "Garantia Total",
        "7 dias de garantia incondicional ou seu dinheiro de volta",
    ),
];

fn smooth_scroll_to(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn scroll_to_id(id: &str) {
    match window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) {
        Some(element) => smooth_scroll_to(&element),
        None => log::warn!("No #{} element to scroll to", id),
    }
}

#[derive(Properties, PartialEq)]
struct RevealProps {
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    delay_ms: u32,
    children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
fn reveal(props: &RevealProps) -> Html {
    let reveal = use_scroll_reveal(RevealOptions::delayed(props.delay_ms));

    html! {
        <div
            ref={reveal.node.clone()}
            class={classes!(props.class.clone(), reveal.class())}
            style={reveal.style()}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BookCardProps {
    book: Book,
    position: usize,
    #[prop_or_default]
    play_signal: u32,
}

#[function_component(BookCard)]
fn book_card(props: &BookCardProps) -> Html {
    let book = &props.book;
    let delay_ms = props.position as u32 * config::BOOK_REVEAL_STAGGER_MS;

    html! {
        <Reveal class="book-card-wrapper" {delay_ms}>
            <div class="book-card">
                <div class="book-cover">
                    <img src={book.cover_image_url.clone()} alt={book.title.clone()} loading="lazy" />
                    <span class="book-badge">{Book::badge(props.position)}</span>
                </div>
                <div class="book-info">
                    <div class="book-header">
                        <span class="book-kind">{"📖 eBook Premium"}</span>
                        <h3>{&book.title}</h3>
                        <h4>{"📖 Sobre este livro:"}</h4>
                        <p class="book-summary">{&book.summary}</p>
                    </div>

                    { if let Some(audio) = book.audio() {
                        html! {
                            <AudioPlayer
                                class="book-audio"
                                audio_url={audio.to_string()}
                                book_title={book.title.clone()}
                                play_signal={props.play_signal}
                            />
                        }
                    } else {
                        html! {}
                    }}

                    <div class="book-benefits">
                        <h4>{"✨ 3 Benefícios principais:"}</h4>
                        <ul>
                            { for benefits_for(props.position).iter().map(|benefit| html! {
                                <li><span class="check">{"✔"}</span>{*benefit}</li>
                            }) }
                        </ul>
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let books = use_state(|| Rc::new(Vec::<Book>::new()));
    let loading = use_state(|| true);
    let has_played_video = use_state(|| hero_video_flag().is_set());
    let hero_pause = use_state(|| 0u32);
    let offer_pause = use_state(|| 0u32);
    let first_audio_signal = use_state(|| 0u32);
    let first_audio_started = use_mut_ref(|| false);
    let first_audio_timeout = use_mut_ref(|| None::<Timeout>);
    let books_section = use_node_ref();

    {
        let books = books.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                spawn_local(async move {
                    books.set(Rc::new(load_books().await));
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let on_hero_play = {
        let has_played_video = has_played_video.clone();
        Callback::from(move |_| {
            if hero_video_flag().record() {
                log::info!("Hero video played for the first time");
            }
            has_played_video.set(true);
        })
    };

    let scroll_to_books = {
        let hero_pause = hero_pause.clone();
        let books = books.clone();
        let books_section = books_section.clone();
        let first_audio_signal = first_audio_signal.clone();
        let first_audio_started = first_audio_started.clone();
        let first_audio_timeout = first_audio_timeout.clone();
        Callback::from(move |_: MouseEvent| {
            hero_pause.set(*hero_pause + 1);

            let Some(section) = books_section.cast::<Element>() else {
                return;
            };
            smooth_scroll_to(&section);

            let books = (*books).clone();
            let first_audio_signal = first_audio_signal.clone();
            let first_audio_started = first_audio_started.clone();
            *first_audio_timeout.borrow_mut() = Some(Timeout::new(config::FIRST_AUDIO_DELAY_MS, move || {
                let has_audio = books.first().and_then(|book| book.audio()).is_some();
                if !has_audio || *first_audio_started.borrow() {
                    return;
                }
                *first_audio_started.borrow_mut() = true;
                first_audio_signal.set(1);
            }));
        })
    };

    let scroll_to_purchase = Callback::from(|_: MouseEvent| scroll_to_id("purchase-section"));

    let purchase = {
        let offer_pause = offer_pause.clone();
        Callback::from(move |_: MouseEvent| {
            offer_pause.set(*offer_pause + 1);
            open_checkout();
        })
    };

    if *loading {
        return html! {
            <div class="page-loading">
                <div class="loading-mic">{"🎤"}</div>
            </div>
        };
    }

    html! {
        <div class="landing-page">
            <section class="hero">
                <div class="hero-glow glow-one" />
                <div class="hero-glow glow-two" />
                <div class="hero-content">
                    <span class="hero-badge">{"🔥 OFERTA LIMITADA - APENAS 48 HORAS"}</span>
                    <h1 class="hero-title">
                        {"Você não precisa deixar o medo de falar em público roubar suas chances de crescer."}
                    </h1>
                    <p class="hero-subtitle">
                        {"Transforme "}<strong class="gold">{"Qualquer Palavra"}</strong>{" em Uma Arma de Influência"}
                    </p>
                    <p class="hero-lead">
                        {"Pare de ser ignorado. Pare de perder oportunidades por não saber se comunicar."}
                    </p>

                    <div class={classes!("hero-video", (!*has_played_video).then(|| "unwatched"))}>
                        <VideoPlayer
                            src={config::HERO_VIDEO_SRC}
                            show_controls={false}
                            on_play={on_hero_play}
                            pause_signal={*hero_pause}
                        />
                    </div>

                    <InfiniteBookStrip books={(*books).clone()} />

                    <div class="impact-quote">
                        <div class="quote-main">{"\"Mais de 70% das oportunidades de crescimento profissional"}</div>
                        <div class="quote-tail">{"estão ligadas a uma boa comunicação.\""}</div>
                    </div>

                    <div class="hero-stats">
                        { for STATS.iter().map(|(icon, label, desc)| html! {
                            <div class="stat" key={*label}>
                                <div class="stat-icon">{*icon}</div>
                                <div class="stat-label">{*label}</div>
                                <div class="stat-desc">{*desc}</div>
                            </div>
                        }) }
                    </div>

                    <button class="cta-primary" onclick={scroll_to_books}>
                        {"📖 Sobre os Livros ›"}
                    </button>

                    <div class="hero-guarantees">
                        { for GUARANTEES.iter().map(|item| html! {
                            <span><span class="check">{"✔"}</span>{*item}</span>
                        }) }
                    </div>
                </div>
            </section>

            <section ref={books_section} class="books-section">
                <Reveal class="section-heading">
                    <span class="section-badge">{"📚 BIBLIOTECA COMPLETA DE ORATÓRIA"}</span>
                    <h2>{"Transforme Sua "}<span class="gold">{"Comunicação"}</span>{" com Estes Livros"}</h2>
                    <p>{"10 livros estrategicamente selecionados para você dominar a arte da comunicação persuasiva"}</p>
                </Reveal>

                <div class="book-grid">
                    { for books.iter().enumerate().map(|(position, book)| html! {
                        <BookCard
                            key={book.id}
                            book={book.clone()}
                            {position}
                            play_signal={if position == 0 { *first_audio_signal } else { 0 }}
                        />
                    }) }
                </div>

                <div class="grid-cta">
                    <button class="cta-gold" onclick={scroll_to_purchase}>
                        {"👑 🔥 QUERO FALAR SEM MEDO 🔥 ⚡"}
                    </button>
                    <p>{"⚡ Acesso instantâneo após o pagamento"}</p>
                </div>
            </section>

            <section class="carousel-section">
                <BookCarousel books={(*books).clone()} on_purchase={Callback::from(|_| open_checkout())} />
            </section>

            <section class="benefits-section">
                <Reveal class="section-heading">
                    <h2>{"Por Que Escolher Nossa "}<span class="gold">{"Biblioteca"}</span>{"?"}</h2>
                </Reveal>
                <div class="benefit-grid">
                    { for BENEFITS.iter().enumerate().map(|(index, (icon, title, description))| html! {
                        <Reveal
                            key={index}
                            class="benefit-card"
                            delay_ms={index as u32 * config::BENEFIT_REVEAL_STAGGER_MS}
                        >
                            <div class="benefit-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="purchase-section" class="offer-section">
                <span class="offer-badge">{"🚨 OFERTA ESPECIAL - TEMPO LIMITADO"}</span>
                <h2>{"Pacote Completo por Apenas"}</h2>
                <div class="offer-prices">
                    <span class="price-old">{"R$ 297,00"}</span>
                    <span class="price-new">{"R$ 17,90"}</span>
                </div>
                <p class="offer-lead">
                    <strong>{"94% de Desconto!"}</strong>
                    {" Uma oportunidade única que não vai durar muito tempo."}
                </p>
                <div class="offer-video">
                    <VideoPlayer
                        src={config::OFFER_VIDEO_SRC}
                        show_controls={false}
                        play_on_intersect={true}
                        play_once_only={true}
                        pause_signal={*offer_pause}
                    />
                </div>
                <button class="cta-gold cta-large" onclick={purchase}>
                    {"👑 🔥 QUERO O KIT 10 LIVROS 🔥 ›"}
                </button>
            </section>

            <Faq />

            <footer class="site-footer">
                <div class="footer-brand">
                    <span class="gold">{"🎤"}</span>
                    <span>{"Oratória Amplificada"}</span>
                </div>
                <p>{"Transformando vidas através do poder da palavra"}</p>
                <span class="footer-copy">
                    {format!("© {} Todos os direitos reservados", chrono::Local::now().format("%Y"))}
                </span>
            </footer>

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #0a0a0a;
                    color: #f5f5f5;
                    overflow-x: hidden;
                }

                .page-loading {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #0a0a0a;
                }

                .loading-mic {
                    font-size: 3rem;
                    animation: pulse 2s ease-in-out infinite;
                }

                .gold {
                    color: #d4af37;
                }

                .check {
                    color: #d4af37;
                    margin-right: 0.5rem;
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding: 4rem 1rem;
                    background: radial-gradient(circle at top, rgba(212, 175, 55, 0.12), transparent 60%);
                }

                .hero-glow {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    animation: float 6s ease-in-out infinite;
                }

                .glow-one {
                    top: 25%;
                    left: 25%;
                    width: 16rem;
                    height: 16rem;
                    background: rgba(212, 175, 55, 0.2);
                }

                .glow-two {
                    bottom: 33%;
                    right: 25%;
                    width: 12rem;
                    height: 12rem;
                    background: rgba(120, 80, 200, 0.2);
                    animation-delay: 3s;
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .hero-badge, .section-badge, .offer-badge {
                    display: inline-block;
                    background: rgba(212, 175, 55, 0.2);
                    color: #d4af37;
                    border: 1px solid rgba(212, 175, 55, 0.3);
                    border-radius: 999px;
                    padding: 0.5rem 1.5rem;
                    font-weight: bold;
                    margin-bottom: 1.5rem;
                }

                .hero-title {
                    font-size: clamp(1.9rem, 5vw, 4.5rem);
                    font-weight: 900;
                    line-height: 1.1;
                    margin-bottom: 2rem;
                    background: linear-gradient(to right, #f5f5f5, #d4af37, #b794f4);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.5rem;
                    color: #999;
                    margin-bottom: 1.5rem;
                }

                .hero-lead {
                    font-size: 1.1rem;
                    color: #999;
                    margin-bottom: 2rem;
                }

                .hero-video, .offer-video {
                    max-width: 64rem;
                    margin: 0 auto 3rem;
                    border-radius: 1rem;
                    overflow: hidden;
                    border: 1px solid rgba(212, 175, 55, 0.2);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }

                .hero-video.unwatched {
                    box-shadow: 0 0 40px rgba(212, 175, 55, 0.3);
                }

                .impact-quote {
                    max-width: 56rem;
                    margin: 0 auto 3rem;
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(212, 175, 55, 0.3);
                    background: linear-gradient(to right, rgba(212, 175, 55, 0.1), rgba(212, 175, 55, 0.2), rgba(212, 175, 55, 0.1));
                    color: #d4af37;
                    font-weight: 900;
                }

                .quote-main {
                    font-size: 2rem;
                    margin-bottom: 0.5rem;
                }

                .quote-tail {
                    font-size: 1.6rem;
                }

                .hero-stats {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 3rem;
                    margin-bottom: 3rem;
                }

                .stat-icon {
                    font-size: 1.5rem;
                    margin-bottom: 0.5rem;
                }

                .stat-label {
                    font-size: 1.5rem;
                    font-weight: 900;
                    color: #d4af37;
                }

                .stat-desc {
                    font-size: 0.875rem;
                    color: #999;
                }

                .cta-primary {
                    padding: 1.5rem 4rem;
                    font-size: 1.25rem;
                    font-weight: bold;
                    color: #0a0a0a;
                    background: #d4af37;
                    border: none;
                    border-radius: 0.75rem;
                    cursor: pointer;
                    box-shadow: 0 10px 30px rgba(212, 175, 55, 0.4);
                    transition: transform 0.3s ease;
                    margin-bottom: 2rem;
                }

                .cta-primary:hover, .cta-gold:hover {
                    transform: scale(1.05);
                }

                .hero-guarantees {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: #999;
                }

                .books-section, .carousel-section, .benefits-section, .offer-section {
                    padding: 4rem 1rem;
                }

                .section-heading {
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                }

                .section-heading h2, .offer-section h2 {
                    font-size: 2.25rem;
                    font-weight: 900;
                    margin-bottom: 1rem;
                }

                .section-heading p {
                    color: #999;
                    font-size: 1.1rem;
                }

                .book-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.25rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }

                @media (min-width: 768px) {
                    .book-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }

                .book-card {
                    display: flex;
                    gap: 1rem;
                    height: 100%;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: rgba(30, 30, 30, 0.6);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }

                .book-card:hover {
                    transform: translateY(-4px);
                    border-color: rgba(212, 175, 55, 0.3);
                }

                .book-cover {
                    position: relative;
                    width: 7rem;
                    flex-shrink: 0;
                    aspect-ratio: 3 / 4;
                    overflow: hidden;
                    border-radius: 0.5rem;
                }

                .book-cover img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }

                .book-card:hover .book-cover img {
                    transform: scale(1.1);
                }

                .book-badge {
                    position: absolute;
                    top: 0.25rem;
                    left: 0.25rem;
                    background: #d4af37;
                    color: #0a0a0a;
                    font-size: 0.75rem;
                    font-weight: bold;
                    padding: 0.1rem 0.4rem;
                    border-radius: 0.25rem;
                }

                .book-info {
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    gap: 0.5rem;
                    min-width: 0;
                }

                .book-kind {
                    font-size: 0.75rem;
                    color: #d4af37;
                }

                .book-info h3 {
                    font-size: 1rem;
                    margin: 0.25rem 0;
                }

                .book-info h4 {
                    font-size: 0.75rem;
                    color: #d4af37;
                    margin: 0.25rem 0;
                }

                .book-summary {
                    font-size: 0.75rem;
                    color: #999;
                    display: -webkit-box;
                    -webkit-line-clamp: 2;
                    -webkit-box-orient: vertical;
                    overflow: hidden;
                }

                .book-benefits ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    font-size: 0.75rem;
                    color: #999;
                }

                .grid-cta {
                    text-align: center;
                    margin-top: 3rem;
                }

                .grid-cta p {
                    font-size: 0.875rem;
                    color: #999;
                }

                .cta-gold {
                    padding: 1.25rem 3rem;
                    font-size: 1.25rem;
                    font-weight: 900;
                    color: #000;
                    background: linear-gradient(to right, #facc15, #eab308, #ca8a04);
                    border: 2px solid #fde047;
                    border-radius: 1rem;
                    cursor: pointer;
                    box-shadow: 0 20px 40px rgba(234, 179, 8, 0.5);
                    animation: pulse 2s ease-in-out infinite;
                    transition: transform 0.3s ease;
                }

                .cta-large {
                    font-size: 1.5rem;
                    padding: 2rem 4rem;
                    border-width: 4px;
                }

                .benefits-section {
                    background: rgba(30, 30, 30, 0.2);
                }

                .benefit-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .benefit-card {
                    text-align: center;
                    padding: 2rem;
                    border-radius: 0.75rem;
                    background: rgba(30, 30, 30, 0.5);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }

                .benefit-icon {
                    font-size: 2rem;
                    margin-bottom: 1.5rem;
                }

                .benefit-card p {
                    color: #999;
                    line-height: 1.6;
                }

                .offer-section {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .offer-prices {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }

                .price-old {
                    font-size: 2rem;
                    color: #999;
                    text-decoration: line-through;
                }

                .price-new {
                    font-size: 4.5rem;
                    font-weight: 900;
                    color: #d4af37;
                }

                .offer-lead {
                    font-size: 1.5rem;
                    margin-bottom: 2rem;
                }

                .site-footer {
                    padding: 3rem 1rem;
                    text-align: center;
                    background: #141414;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }

                .footer-brand {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    font-size: 1.5rem;
                    font-weight: bold;
                    margin-bottom: 1.5rem;
                }

                .site-footer p, .footer-copy {
                    color: #999;
                }
                "#}
            </style>
        </div>
    }
}
