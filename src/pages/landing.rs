use std::rc::Rc;

use yew::prelude::*;

use crate::components::cta::{CtaButton, CtaVariant};
use crate::components::faq::FaqAccordion;
use crate::components::navbar::NavBar;
use crate::components::reveal::{Reveal, RevealScope};
use crate::components::stats::StatsSection;
use crate::content::{Card, PageContent, Plan};

fn card(card: &Card) -> Html {
    html! {
        <>
            <div class="card-icon">{ card.icon.clone() }</div>
            <h3>{ card.title.clone() }</h3>
            <p>{ card.body.clone() }</p>
        </>
    }
}

fn pricing_card(plan: &Plan) -> Html {
    html! {
        <Reveal class={classes!("pricing-card", plan.featured.then(|| "featured"))}>
            <h3>{ plan.name.clone() }</h3>
            <div class="price">
                { plan.price.clone() }
                <span class="period">{ plan.period.clone() }</span>
            </div>
            <ul class="plan-features">
                { for plan.features.iter().map(|feature| html! { <li>{ feature.clone() }</li> }) }
            </ul>
            <CtaButton variant={CtaVariant::Primary} label={plan.cta.clone()} class="btn-block" />
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<PageContent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = &props.content;
    let hero = &content.hero;

    html! {
        <RevealScope>
            <NavBar
                brand={content.brand.clone()}
                links={content.nav.clone()}
                cta_label={content.nav_cta.clone()}
            />

            <header class="hero">
                <div class="hero-content">
                    <h1>{ hero.title.clone() }</h1>
                    <p class="hero-subtitle">{ hero.subtitle.clone() }</p>
                    <div class="hero-actions">
                        <CtaButton
                            variant={CtaVariant::Primary}
                            label={hero.primary_cta.clone()}
                            class="btn-large"
                        />
                        <CtaButton
                            variant={CtaVariant::Secondary}
                            label={hero.secondary_cta.clone()}
                            href={hero.secondary_href.clone()}
                            class="btn-large"
                        />
                    </div>
                </div>
            </header>

            <section id="curriculum" class="curriculum">
                <h2>{ content.headings.curriculum.clone() }</h2>
                <div class="curriculum-grid">
                    { for content.curriculum.iter().map(|item| html! {
                        <Reveal class="curriculum-card">{ card(item) }</Reveal>
                    }) }
                </div>
            </section>

            <StatsSection stats={content.stats.clone()} />

            <section id="benefits" class="benefits">
                <h2>{ content.headings.benefits.clone() }</h2>
                <div class="benefits-grid">
                    { for content.benefits.iter().map(|item| html! {
                        <Reveal class="benefit-item">{ card(item) }</Reveal>
                    }) }
                </div>
            </section>

            <section id="pricing" class="pricing">
                <h2>{ content.headings.pricing.clone() }</h2>
                <div class="pricing-grid">
                    { for content.pricing.iter().map(pricing_card) }
                </div>
            </section>

            <section id="faq" class="faq">
                <h2>{ content.headings.faq.clone() }</h2>
                <FaqAccordion entries={content.faq.clone()} />
            </section>

            <footer class="footer">
                <p>{ content.footer.clone() }</p>
            </footer>
        </RevealScope>
    }
}
