//! Ambient particle emitters: one ephemeral element per tick, removed when
//! its animation finishes.

use crate::core::{EphemeralSet, ParticleKind, ParticleSpec, SceneRng};
use crate::timers::{Clock, Interval};
use js_sys::{Array, Object, Reflect};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Slack given to `onfinish` before a record is swept as expired.
const EXPIRE_GRACE_MS: f64 = 250.0;

pub type LiveSet = Rc<RefCell<EphemeralSet<Particle>>>;

/// A live particle: its element plus the animation and `onfinish` callback
/// driving it. Dropping the record drops the callback with it.
pub struct Particle {
    el: web::Element,
    animation: Option<web::Animation>,
    _on_finish: Option<Closure<dyn FnMut()>>,
}

impl Particle {
    fn new(el: web::Element) -> Self {
        Self {
            el,
            animation: None,
            _on_finish: None,
        }
    }

    /// Stop the animation and take the element off the page.
    pub fn retire(self) {
        if let Some(animation) = &self.animation {
            animation.set_onfinish(None);
            animation.cancel();
        }
        self.el.remove();
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(method, catch, js_name = animate)]
    fn animate_keyframes(
        this: &web::Element,
        keyframes: &Array,
        options: &Object,
    ) -> Result<web::Animation, JsValue>;
}

pub struct Emitter {
    _tick: Interval,
}

impl Emitter {
    pub fn start(
        document: &web::Document,
        container: &web::Element,
        kind: ParticleKind,
        mut rng: SceneRng,
        live: &LiveSet,
        clock: Clock,
    ) -> Option<Self> {
        let document = document.clone();
        let container = container.clone();
        let live_tick = live.clone();
        let tick = Interval::new(kind.interval_ms(), move || {
            let now = clock.now_ms();
            sweep_expired(&live_tick, now);
            let spec = kind.spawn(&mut rng);
            spawn_particle(&document, &container, &spec, &live_tick, now);
        })?;
        log::info!("[emitter] {} every {}ms", kind.name(), kind.interval_ms());
        Some(Self { _tick: tick })
    }
}

fn sweep_expired(live: &LiveSet, now_ms: f64) {
    let stale = live.borrow_mut().expire(now_ms - EXPIRE_GRACE_MS);
    for particle in stale {
        particle.retire();
    }
}

/// Put one particle into `container` and animate it; the record is
/// completed (and the element removed) from the animation's `onfinish`.
pub fn spawn_particle(
    document: &web::Document,
    container: &web::Element,
    spec: &ParticleSpec,
    live: &LiveSet,
    now_ms: f64,
) {
    let Ok(el) = document.create_element("div") else {
        return;
    };
    _ = el.set_attribute("class", &format!("particle particle-{}", spec.kind.name()));
    _ = el.set_attribute("style", &spec.css);
    if container.append_child(&el).is_err() {
        return;
    }
    let id = live.borrow_mut().spawn(Particle::new(el.clone()), now_ms, spec.duration_ms);

    match animate_keyframes(&el, &keyframes_js(spec), &options_js(spec)) {
        Ok(animation) => {
            let weak: Weak<RefCell<EphemeralSet<Particle>>> = Rc::downgrade(live);
            let on_finish: Closure<dyn FnMut()> = Closure::once(move || {
                let Some(live) = weak.upgrade() else {
                    return;
                };
                let finished = live.borrow_mut().complete(id);
                if let Some(particle) = finished {
                    particle.retire();
                }
            });
            animation.set_onfinish(Some(on_finish.as_ref().unchecked_ref()));
            if let Some(particle) = live.borrow_mut().get_mut(id) {
                particle.animation = Some(animation);
                particle._on_finish = Some(on_finish);
            }
        }
        Err(e) => {
            log::warn!("[emitter] animate failed for {}: {:?}", spec.kind.name(), e);
            let finished = live.borrow_mut().complete(id);
            if let Some(particle) = finished {
                particle.retire();
            }
        }
    }
}

fn keyframes_js(spec: &ParticleSpec) -> Array {
    spec.keyframes
        .iter()
        .map(|k| {
            let frame = Object::new();
            _ = Reflect::set(&frame, &"transform".into(), &k.transform.as_str().into());
            _ = Reflect::set(&frame, &"opacity".into(), &JsValue::from_f64(k.opacity as f64));
            JsValue::from(frame)
        })
        .collect()
}

fn options_js(spec: &ParticleSpec) -> Object {
    let opts = Object::new();
    _ = Reflect::set(&opts, &"duration".into(), &JsValue::from_f64(spec.duration_ms));
    _ = Reflect::set(&opts, &"easing".into(), &spec.easing.into());
    opts
}
