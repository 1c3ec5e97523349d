//! Cross-fading image slideshow.
//!
//! A slideshow renders one slide and one dot per image into its container's
//! `.slides` and `.dots` regions, then advances on a timer. Exactly one
//! slide and one dot carry the `active` class, always at the same index.
//!
//! ## State machine
//!
//! ```text
//!               pointer-enter
//!   ┌─────────┐ ───────────────▶ ┌─────────┐
//!   │ running │                  │ stopped │
//!   └─────────┘ ◀─────────────── └─────────┘
//!     │  ▲       pointer-leave,
//!     │  │       prev / next / dot
//!     └──┘
//!   tick: go(index + 1)
//! ```
//!
//! Manual navigation (prev, next, dot) always restarts the timer, so the
//! next automatic advance is a full interval away. Starting always cancels
//! the existing timer first; an instance never holds two.
//!
//! Instances are independent. Each owns its own [`TimerHandle`] on the
//! page's [`TimerQueue`], installed under the slideshow's container id.

use crate::dom::Element;
use crate::timer::{TimerHandle, TimerQueue};
use log::debug;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Auto-advance period when the page does not override it.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(4000);

/// Alt text used when an image has none.
pub const DEFAULT_ALT: &str = "Photo";

/// One image in a slideshow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideImage {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl SlideImage {
    pub fn new(src: &str) -> Self {
        Self {
            src: src.to_string(),
            alt: None,
            caption: None,
        }
    }

    /// Alt text, `Photo` when missing or empty.
    pub fn alt_text(&self) -> &str {
        self.alt
            .as_deref()
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_ALT)
    }

    pub fn caption_text(&self) -> Option<&str> {
        self.caption.as_deref().filter(|c| !c.is_empty())
    }
}

/// The page elements a slideshow binds to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideshowContainer {
    /// `.slides` region (required)
    pub slides: Option<Element>,
    /// `.dots` region (required)
    pub dots: Option<Element>,
    /// `[data-prev]` control
    pub prev: Option<Element>,
    /// `[data-next]` control
    pub next: Option<Element>,
}

impl SlideshowContainer {
    /// A container with both regions and both controls.
    pub fn complete() -> Self {
        Self {
            slides: Some(Element::new()),
            dots: Some(Element::new()),
            prev: Some(Element::new()),
            next: Some(Element::new()),
        }
    }

    /// Both regions, no prev/next controls.
    pub fn without_controls() -> Self {
        Self {
            prev: None,
            next: None,
            ..Self::complete()
        }
    }

    pub fn slides_html(&self) -> &str {
        self.slides.as_ref().map(Element::inner_html).unwrap_or_default()
    }

    pub fn dots_html(&self) -> &str {
        self.dots.as_ref().map(Element::inner_html).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running,
    Stopped,
}

/// Live state of one initialized slideshow.
#[derive(Debug)]
pub struct Slideshow {
    id: String,
    images: Vec<SlideImage>,
    index: usize,
    interval: Duration,
    timer: Option<TimerHandle>,
}

impl Slideshow {
    /// Render the widget into `container` and start auto-advance at index 0.
    ///
    /// Returns `None`, touching nothing, when there are no images or either
    /// required region is missing.
    pub fn init(
        id: &str,
        container: &mut SlideshowContainer,
        images: Vec<SlideImage>,
        interval: Duration,
        timers: &mut TimerQueue,
    ) -> Option<Self> {
        if images.is_empty() || container.slides.is_none() || container.dots.is_none() {
            debug!("slideshow {id:?} skipped: no images or missing regions");
            return None;
        }
        let mut show = Self {
            id: id.to_string(),
            images,
            index: 0,
            interval,
            timer: None,
        };
        show.render(container);
        show.start(timers);
        Some(show)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn images(&self) -> &[SlideImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false for an initialized slideshow.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> TimerState {
        if self.timer.is_some() {
            TimerState::Running
        } else {
            TimerState::Stopped
        }
    }

    /// Select slide `n`, wrapping in both directions. Leaves the timer alone.
    pub fn go(&mut self, n: i64, container: &mut SlideshowContainer) {
        self.index = wrap_index(n, self.images.len());
        self.render(container);
    }

    /// Timer tick: one step forward.
    pub fn tick(&mut self, container: &mut SlideshowContainer) {
        self.go(self.index as i64 + 1, container);
    }

    /// Previous control. Ignored when the container has none.
    pub fn prev(&mut self, container: &mut SlideshowContainer, timers: &mut TimerQueue) -> bool {
        if container.prev.is_none() {
            return false;
        }
        self.go(self.index as i64 - 1, container);
        self.start(timers);
        true
    }

    /// Next control. Ignored when the container has none.
    pub fn next(&mut self, container: &mut SlideshowContainer, timers: &mut TimerQueue) -> bool {
        if container.next.is_none() {
            return false;
        }
        self.go(self.index as i64 + 1, container);
        self.start(timers);
        true
    }

    /// Dot `i`. Ignored when there is no such dot.
    pub fn dot(
        &mut self,
        i: usize,
        container: &mut SlideshowContainer,
        timers: &mut TimerQueue,
    ) -> bool {
        if i >= self.images.len() {
            return false;
        }
        self.index = i;
        self.render(container);
        self.start(timers);
        true
    }

    /// Pointer entered the container: pause without moving.
    pub fn pointer_enter(&mut self, timers: &mut TimerQueue) {
        self.stop(timers);
    }

    /// Pointer left the container: resume from the current slide.
    pub fn pointer_leave(&mut self, timers: &mut TimerQueue) {
        self.start(timers);
    }

    /// (Re)start auto-advance; any running timer is cancelled first.
    pub fn start(&mut self, timers: &mut TimerQueue) {
        self.stop(timers);
        self.timer = Some(timers.set_interval(&self.id, self.interval));
    }

    pub fn stop(&mut self, timers: &mut TimerQueue) {
        if let Some(handle) = self.timer.take() {
            timers.clear(handle);
        }
    }

    fn render(&self, container: &mut SlideshowContainer) {
        if let Some(slides) = container.slides.as_mut() {
            slides.set_inner_html(render_slides(&self.images, self.index).into_string());
        }
        if let Some(dots) = container.dots.as_mut() {
            dots.set_inner_html(render_dots(self.images.len(), self.index).into_string());
        }
    }
}

/// `((n mod len) + len) mod len`; `len` must be non-zero.
pub fn wrap_index(n: i64, len: usize) -> usize {
    n.rem_euclid(len as i64) as usize
}

/// One `.slide` per image; the one at `active` also gets `.active`.
pub fn render_slides(images: &[SlideImage], active: usize) -> Markup {
    html! {
        @for (i, image) in images.iter().enumerate() {
            div.slide.active[i == active] {
                img src=(image.src) alt=(image.alt_text()) loading="lazy";
                @if let Some(caption) = image.caption_text() {
                    div.caption { (caption) }
                }
            }
        }
    }
}

/// One `.dot` button per slide.
pub fn render_dots(count: usize, active: usize) -> Markup {
    html! {
        @for i in 0..count {
            button.dot.active[i == active] aria-label={ "Go to slide " (i + 1) } {}
        }
    }
}
