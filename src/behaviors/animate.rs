//! Visibility-triggered animations: stat counters, language bars, chart
//! tags, slide-in reveal

use std::cell::RefCell;
use std::rc::Rc;

use gradreport_core::animation::{parse_bar_percent, stagger_delay, CounterTarget, OneShot};
use gradreport_core::config::{AnimationConfig, TagsConfig};
use gradreport_core::scroll::percent_width;
use gradreport_core::tags::parse_tags;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

use crate::dom;

/// Run `on_visible` the first time each target intersects the viewport,
/// then stop observing it
fn observe_once<F>(
    targets: Vec<Element>,
    threshold: f64,
    root_margin: Option<&str>,
    mut on_visible: F,
) -> Result<(), JsValue>
where
    F: FnMut(usize, &Element) + 'static,
{
    if targets.is_empty() {
        return Ok(());
    }

    let watched: Vec<(Element, OneShot)> = targets
        .into_iter()
        .map(|el| (el, OneShot::default()))
        .collect();
    let watched = Rc::new(RefCell::new(watched));

    let state = Rc::clone(&watched);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let mut watched = state.borrow_mut();
                let Some(index) = watched.iter().position(|(el, _)| dom::same(el, &target)) else {
                    continue;
                };
                if watched[index].1.fire() {
                    observer.unobserve(&target);
                    drop(watched);
                    on_visible(index, &target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for (el, _) in watched.borrow().iter() {
        observer.observe(el);
    }
    Ok(())
}

// =============================================================================
// COUNTERS
// =============================================================================

pub fn init_counters(
    window: &Window,
    document: &Document,
    config: &AnimationConfig,
) -> Result<(), JsValue> {
    let mut elements = Vec::new();
    let mut targets = Vec::new();
    for el in dom::query_all(document, "[data-count]")? {
        let raw = dom::data(&el, "count").unwrap_or_default();
        let suffix = dom::data(&el, "suffix").unwrap_or_default();
        match CounterTarget::parse(&raw, &suffix) {
            Ok(target) => {
                elements.push(el);
                targets.push(target);
            }
            Err(e) => tracing::warn!("skipping counter: {}", e),
        }
    }

    let window = window.clone();
    let duration = config.counter_duration_ms;
    let separator = config.group_separator.clone();
    observe_once(elements, config.counter_threshold, None, move |i, el| {
        run_counter(&window, el.clone(), targets[i].clone(), duration, separator.clone());
    })
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Drive one counter with `requestAnimationFrame` until it reaches its target
fn run_counter(
    window: &Window,
    el: Element,
    target: CounterTarget,
    duration_ms: f64,
    separator: String,
) {
    let Some(start) = window.performance().map(|p| p.now()) else {
        el.set_text_content(Some(&target.final_text(&separator)));
        return;
    };

    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let next = Rc::clone(&frame);
    let win = window.clone();
    *frame.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |now: f64| {
        let step = target.frame(now - start, duration_ms, &separator);
        el.set_text_content(Some(&step.text));
        if step.done {
            // release the loop; this drops the running closure
            let _ = next.borrow_mut().take();
        } else if let Some(cb) = next.borrow().as_ref() {
            let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }));

    if let Some(cb) = frame.borrow().as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    };
}

// =============================================================================
// BARS / TAGS / REVEAL
// =============================================================================

pub fn init_bars(document: &Document, config: &AnimationConfig) -> Result<(), JsValue> {
    let mut bars = Vec::new();
    let mut widths = Vec::new();
    for bar in dom::query_all(document, ".lang-bar-fill[data-pct]")? {
        match parse_bar_percent(&dom::data(&bar, "pct").unwrap_or_default()) {
            Ok(pct) => {
                dom::set_style(&bar, "width", "0%");
                bars.push(bar);
                widths.push(percent_width(pct));
            }
            Err(e) => tracing::warn!("skipping bar: {}", e),
        }
    }

    observe_once(bars, config.bar_threshold, None, move |i, bar| {
        dom::set_style(bar, "width", &widths[i]);
    })
}

/// Render `data-tags` on each chart card as badges in its
/// `.chart-annotations` container
pub fn init_chart_tags(document: &Document, config: &TagsConfig) -> Result<(), JsValue> {
    for card in dom::query_all(document, ".chart-card[data-tags]")? {
        let Some(wrap) = card.query_selector(".chart-annotations")? else {
            continue;
        };
        let raw = dom::data(&card, "tags").unwrap_or_default();
        for tag in parse_tags(&raw, &config.default_color) {
            let badge = document.create_element("span")?;
            badge.set_class_name(&tag.class_name());
            badge.set_text_content(Some(&tag.label));
            wrap.append_child(&badge)?;
        }
    }
    Ok(())
}

pub fn init_reveal(document: &Document, config: &AnimationConfig) -> Result<(), JsValue> {
    observe_once(
        dom::query_all(document, ".chart-card, .panel")?,
        config.reveal_threshold,
        Some(config.reveal_root_margin.as_str()),
        |_, el| dom::set_class(el, "slide-in", true),
    )?;

    let cards = dom::query_all(document, ".stat-card")?;
    let delays: Vec<String> = (0..cards.len())
        .map(|i| stagger_delay(i, config.stat_stagger_ms))
        .collect();
    for (card, delay) in cards.iter().zip(&delays) {
        dom::set_style(card, "animation-delay", delay);
    }
    // the shorthand resets animation-delay
    observe_once(cards, config.reveal_threshold, None, move |i, card| {
        dom::set_style(card, "animation", "slideIn 0.6s ease-out forwards");
        dom::set_style(card, "animation-delay", &delays[i]);
    })
}
