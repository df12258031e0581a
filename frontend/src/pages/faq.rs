use yew::prelude::*;
use web_sys::MouseEvent;

/// Single-open accordion: opening one item closes the others, clicking the
/// open item collapses it.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

const QUESTIONS: [(&str, &str); 5] = [
    (
        "🎯 Como funciona o acesso aos livros?",
        "Após a compra, você recebe acesso imediato à biblioteca completa com todos os 10 eBooks em formato PDF, podendo baixar e ler em qualquer dispositivo.",
    ),
    (
        "⏰ Quanto tempo tenho para acessar o conteúdo?",
        "O acesso é vitalício! Uma vez adquirida, a biblioteca é sua para sempre, sem mensalidades ou renovações.",
    ),
    (
        "🛡️ E se eu não gostar do conteúdo?",
        "Oferecemos 7 dias de garantia incondicional. Se não ficar satisfeito, devolvemos 100% do seu investimento.",
    ),
    (
        "📱 Posso ler em qualquer dispositivo?",
        "Sim! Os livros estão em formato PDF e podem ser lidos em computadores, tablets, smartphones e e-readers.",
    ),
    (
        "🎓 Para quem é indicado este conteúdo?",
        "Para qualquer pessoa que deseja melhorar sua comunicação: profissionais, estudantes, empreendedores, líderes ou qualquer um que queira falar com mais confiança e persuasão.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section class="faq-section">
            <div class="faq-container">
                <div class="faq-heading">
                    <h2>{"Perguntas "}<span class="gold">{"Frequentes"}</span></h2>
                    <p>{"Tire suas dúvidas sobre a Biblioteca de Oratória"}</p>
                </div>

                { for QUESTIONS.iter().enumerate().map(|(index, (question, answer))| {
                    let on_toggle = {
                        let open = open.clone();
                        Callback::from(move |_| open.set(toggle_open(*open, index)))
                    };
                    html! {
                        <FaqItem
                            key={index}
                            question={*question}
                            is_open={*open == Some(index)}
                            {on_toggle}
                        >
                            <p>{*answer}</p>
                        </FaqItem>
                    }
                }) }
            </div>

            <style>
                {r#"
                .faq-section {
                    padding: 6rem 1rem;
                    background: rgba(30, 30, 30, 0.2);
                }

                .faq-container {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .faq-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .faq-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 900;
                    margin-bottom: 1rem;
                }

                .faq-heading p {
                    font-size: 1.1rem;
                    color: #999;
                }

                .faq-item {
                    background: rgba(30, 30, 30, 0.5);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 12px;
                    padding: 0.5rem 1.5rem;
                    margin-bottom: 1rem;
                    transition: border-color 0.3s ease;
                }

                .faq-item.open {
                    border-color: rgba(212, 175, 55, 0.3);
                }

                .faq-question {
                    width: 100%;
                    padding: 1rem 0;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    color: #d4af37;
                    font-size: 1.1rem;
                    font-weight: bold;
                    text-align: left;
                    cursor: pointer;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    margin-left: 1rem;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    color: #999;
                    transition: max-height 0.3s ease;
                }

                .faq-item.open .faq-answer {
                    max-height: 500px;
                    padding-bottom: 1rem;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_an_item_closes_the_previous_one() {
        assert_eq!(toggle_open(None, 2), Some(2));
        assert_eq!(toggle_open(Some(2), 4), Some(4));
    }

    #[test]
    fn clicking_the_open_item_collapses_it() {
        assert_eq!(toggle_open(Some(1), 1), None);
    }
}
