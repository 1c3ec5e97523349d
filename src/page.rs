//! Page bindings and the page runtime.
//!
//! [`PageBindings`] is the explicit stand-in for document lookups: it is
//! built once per page with an optional entry for every region the
//! hydrator knows about, and builders receive the parts they need. Absent
//! regions turn the matching builder into a no-op.
//!
//! [`Page`] owns the bindings plus everything that lives for the rest of the
//! page's life: the theme variables on the root, the timer queue, the
//! slideshow instances and the last loaded content document. UI events go
//! through [`Page::dispatch`], time through [`Page::advance`]. Everything
//! runs on the caller's thread.

use crate::content::ContentDocument;
use crate::footer::FooterRegion;
use crate::header::HeaderRegion;
use crate::slideshow::{DEFAULT_INTERVAL, SlideImage, Slideshow, SlideshowContainer};
use crate::theme::{ResolvedTheme, ThemeVars};
use crate::timer::TimerQueue;
use log::debug;
use std::collections::BTreeMap;
use std::time::Duration;

/// Everything the hydrator can bind to on one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageBindings {
    /// Location path of the page, e.g. `/programmes.html`.
    pub path: String,
    /// `header.site-header`
    pub header: Option<HeaderRegion>,
    pub footer: FooterRegion,
    /// Slideshow containers keyed by element id.
    pub slideshows: BTreeMap<String, SlideshowContainer>,
}

impl PageBindings {
    /// A page with nothing to bind to.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            ..Self::default()
        }
    }

    /// A page with a full header and footer.
    pub fn complete(path: &str) -> Self {
        Self {
            path: path.to_string(),
            header: Some(HeaderRegion::complete()),
            footer: FooterRegion::complete(),
            slideshows: BTreeMap::new(),
        }
    }

    pub fn with_slideshow(mut self, id: &str, container: SlideshowContainer) -> Self {
        self.slideshows.insert(id.to_string(), container);
        self
    }
}

/// A UI event delivered to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// `.menu-toggle` activated.
    MenuToggle,
    /// `[data-prev]` in the slideshow with this id.
    Prev(String),
    /// `[data-next]` in the slideshow with this id.
    Next(String),
    /// Dot at a position in the slideshow with this id.
    Dot(String, usize),
    PointerEnter(String),
    PointerLeave(String),
}

#[derive(Debug)]
pub struct Page {
    pub(crate) bindings: PageBindings,
    pub(crate) theme: ThemeVars,
    pub(crate) resolved: Option<ResolvedTheme>,
    pub(crate) content: Option<ContentDocument>,
    timers: TimerQueue,
    slideshows: BTreeMap<String, Slideshow>,
    slideshow_interval: Duration,
}

impl Page {
    /// A page whose root starts with `theme` (usually parsed from its
    /// stylesheet).
    pub fn new(bindings: PageBindings, theme: ThemeVars) -> Self {
        Self {
            bindings,
            theme,
            resolved: None,
            content: None,
            timers: TimerQueue::new(),
            slideshows: BTreeMap::new(),
            slideshow_interval: DEFAULT_INTERVAL,
        }
    }

    /// Interval used by [`Page::init_slideshow`] when none is given.
    pub fn with_slideshow_interval(mut self, interval: Duration) -> Self {
        self.slideshow_interval = interval;
        self
    }

    pub fn bindings(&self) -> &PageBindings {
        &self.bindings
    }

    pub fn header(&self) -> Option<&HeaderRegion> {
        self.bindings.header.as_ref()
    }

    pub fn footer(&self) -> &FooterRegion {
        &self.bindings.footer
    }

    pub fn theme(&self) -> &ThemeVars {
        &self.theme
    }

    /// Theme resolved by the last bootstrap, if one ran.
    pub fn resolved_theme(&self) -> Option<&ResolvedTheme> {
        self.resolved.as_ref()
    }

    /// Content document loaded by the last bootstrap.
    pub fn content(&self) -> Option<&ContentDocument> {
        self.content.as_ref()
    }

    pub fn slideshow(&self, id: &str) -> Option<&Slideshow> {
        self.slideshows.get(id)
    }

    pub fn slideshow_container(&self, id: &str) -> Option<&SlideshowContainer> {
        self.bindings.slideshows.get(id)
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    /// Start a slideshow in the container with `id`.
    ///
    /// Returns false (and changes nothing) when the container is missing,
    /// lacks a required region, or `images` is empty. Re-initializing an id
    /// cancels the previous instance's timer before replacing it.
    pub fn init_slideshow(
        &mut self,
        id: &str,
        images: Vec<SlideImage>,
        interval: Option<Duration>,
    ) -> bool {
        let Some(container) = self.bindings.slideshows.get_mut(id) else {
            debug!("slideshow {id:?} skipped: no container");
            return false;
        };
        let interval = interval.unwrap_or(self.slideshow_interval);
        let Some(show) = Slideshow::init(id, container, images, interval, &mut self.timers) else {
            return false;
        };
        if let Some(mut old) = self.slideshows.insert(id.to_string(), show) {
            old.stop(&mut self.timers);
        }
        true
    }

    /// Handle one UI event. Returns whether anything reacted to it.
    pub fn dispatch(&mut self, event: PageEvent) -> bool {
        debug!("dispatch {event:?}");
        match event {
            PageEvent::MenuToggle => self
                .bindings
                .header
                .as_mut()
                .and_then(HeaderRegion::toggle_menu)
                .is_some(),
            PageEvent::Prev(id) => self
                .with_slideshow(&id, |show, container, timers| show.prev(container, timers))
                .unwrap_or(false),
            PageEvent::Next(id) => self
                .with_slideshow(&id, |show, container, timers| show.next(container, timers))
                .unwrap_or(false),
            PageEvent::Dot(id, i) => self
                .with_slideshow(&id, |show, container, timers| show.dot(i, container, timers))
                .unwrap_or(false),
            PageEvent::PointerEnter(id) => self
                .with_slideshow(&id, |show, _, timers| show.pointer_enter(timers))
                .is_some(),
            PageEvent::PointerLeave(id) => self
                .with_slideshow(&id, |show, _, timers| show.pointer_leave(timers))
                .is_some(),
        }
    }

    /// Let `by` elapse, delivering timer ticks in order. Returns the number
    /// of ticks delivered.
    pub fn advance(&mut self, by: Duration) -> usize {
        let ticks = self.timers.advance(by);
        let mut delivered = 0;
        for tick in ticks {
            let show = self.slideshows.get_mut(&tick.owner);
            let container = self.bindings.slideshows.get_mut(&tick.owner);
            if let (Some(show), Some(container)) = (show, container) {
                show.tick(container);
                delivered += 1;
            }
        }
        delivered
    }

    fn with_slideshow<T>(
        &mut self,
        id: &str,
        f: impl FnOnce(&mut Slideshow, &mut SlideshowContainer, &mut TimerQueue) -> T,
    ) -> Option<T> {
        let show = self.slideshows.get_mut(id)?;
        let container = self.bindings.slideshows.get_mut(id)?;
        Some(f(show, container, &mut self.timers))
    }
}
