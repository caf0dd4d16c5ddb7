//! Meadow cover: Newton's tree, grass, falling leaves and a thought bubble.

use crate::constants::*;
use crate::core::generator::SWAY_KEYFRAMES;
use crate::core::palette::THOUGHTS;
use crate::core::pointer::{cloud_margin, meadow_parallax, normalize_centered};
use crate::core::rng::*;
use crate::core::{generate_grass, CaptionCycler, GrassParams, ParticleKind};
use crate::dom::{self, set_style, Listener};
use crate::emitter::{Emitter, LiveSet};
use crate::events::hover::HoverStyle;
use crate::events::{wire_hover_style, wire_pointer_move};
use crate::timers::{Clock, Interval};
use web_sys as web;

static TITLE_GLOW: HoverStyle = HoverStyle {
    enter: &[
        ("filter", TITLE_GLOW_FILTER),
        ("transition", TITLE_GLOW_TRANSITION),
    ],
    leave: &[("filter", TITLE_REST_FILTER)],
};

#[derive(Default)]
pub struct Meadow {
    listeners: Vec<Listener>,
    emitters: Vec<Emitter>,
    thoughts: Option<Interval>,
    blades: Vec<web::Element>,
    sway_style: Option<web::Element>,
}

impl Meadow {
    pub fn mount(document: &web::Document, seed: u64, live: &LiveSet, clock: Clock) -> Self {
        let mut m = Meadow::default();
        let scene = dom::query(document, SEL_SCENE);

        if let Some(scene) = &scene {
            m.listeners.push(wire_parallax(document, scene));
        } else {
            log::debug!("[meadow] no {}; parallax and particles skipped", SEL_SCENE);
        }

        for (selector, params, salt) in [
            (SEL_GRASS, &GrassParams::HORIZON, SALT_GRASS),
            (SEL_GRASS_TOP, &GrassParams::TOP, SALT_GRASS_TOP),
        ] {
            if let Some(svg) = dom::query(document, selector) {
                let mut rng = child_rng(seed, salt);
                m.blades.extend(plant_grass(document, &svg, params, &mut rng));
                log::info!("[meadow] {} blades={}", selector, params.count);
            }
        }
        m.sway_style = dom::inject_style(document, SWAY_KEYFRAMES);

        if let Some(scene) = &scene {
            for (kind, salt) in [
                (ParticleKind::Leaf, SALT_LEAF),
                (ParticleKind::Sparkle, SALT_SPARKLE),
            ] {
                if let Some(e) = Emitter::start(document, scene, kind, child_rng(seed, salt), live, clock) {
                    m.emitters.push(e);
                }
            }
        }

        if let Some(text) = dom::query(document, SEL_THOUGHT_TEXT) {
            let mut cycler = CaptionCycler::new(THOUGHTS);
            m.thoughts = Interval::new(THOUGHT_INTERVAL_MS, move || {
                if let Some(line) = cycler.advance() {
                    text.set_text_content(Some(line));
                }
            });
        }

        for word in dom::query_all(document, SEL_TITLE_WORD) {
            m.listeners.extend(wire_hover_style(&word, &TITLE_GLOW));
        }

        m
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
            && self.emitters.is_empty()
            && self.thoughts.is_none()
            && self.blades.is_empty()
    }

    /// Stop every effect and remove the generated blades and injected style.
    pub fn dispose(self) {
        let Meadow {
            listeners,
            emitters,
            thoughts,
            blades,
            sway_style,
        } = self;
        drop(listeners);
        drop(emitters);
        drop(thoughts);
        for blade in blades {
            blade.remove();
        }
        if let Some(style) = sway_style {
            style.remove();
        }
    }
}

fn wire_parallax(document: &web::Document, scene: &web::Element) -> Listener {
    let tree = dom::query(document, SEL_TREE_GROUP);
    let sun = dom::query(document, SEL_SUN);
    let clouds = dom::query_all(document, SEL_CLOUD);
    wire_pointer_move(scene, move |client, viewport| {
        let p = normalize_centered(client, viewport);
        let px = meadow_parallax(p);
        if let Some(tree) = &tree {
            set_style(tree, "transform", &px.tree_transform());
        }
        if let Some(sun) = &sun {
            set_style(sun, "transform", &px.sun_transform());
        }
        for (i, cloud) in clouds.iter().enumerate() {
            set_style(cloud, "margin-top", &format!("{:.2}px", cloud_margin(i, p)));
        }
    })
}

fn plant_grass(
    document: &web::Document,
    svg: &web::Element,
    params: &GrassParams,
    rng: &mut SceneRng,
) -> Vec<web::Element> {
    generate_grass(params, rng)
        .into_iter()
        .filter_map(|blade| {
            let path = document.create_element_ns(Some(SVG_NS), "path").ok()?;
            _ = path.set_attribute("d", &blade.path);
            _ = path.set_attribute("stroke", &blade.stroke);
            _ = path.set_attribute("stroke-width", &blade.stroke_width.to_string());
            _ = path.set_attribute("fill", "none");
            _ = path.set_attribute("stroke-linecap", "round");
            _ = path.set_attribute("style", &format!("animation: {}", blade.animation));
            svg.append_child(&path).ok()?;
            Some(path)
        })
        .collect()
}
