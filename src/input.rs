//! Pointer and touch input, reduced to one position stream.

use std::cell::Cell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, Touch, TouchEvent, TouchList};

use crate::model::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Pointer,
    Touch,
}

/// A raw DOM event viewed as a single client-space position.
#[derive(Clone, Copy, Debug)]
pub enum PositionSource<'a> {
    Pointer(&'a MouseEvent),
    /// One finger drives the gesture; extra fingers are ignored.
    Touch(&'a TouchEvent),
}

impl PositionSource<'_> {
    pub fn kind(&self) -> InputKind {
        match self {
            PositionSource::Pointer(_) => InputKind::Pointer,
            PositionSource::Touch(_) => InputKind::Touch,
        }
    }

    pub fn position(&self) -> Option<Point> {
        self.position_of(None)
    }

    /// Position of the driving contact. For touch input `primary` selects the
    /// touch by identifier, `None` takes the first active touch.
    pub fn position_of(&self, primary: Option<i32>) -> Option<Point> {
        match self {
            PositionSource::Pointer(e) => {
                Some(Point::new(f64::from(e.client_x()), f64::from(e.client_y())))
            }
            PositionSource::Touch(e) => {
                let touches = e.touches();
                let touch = match primary {
                    Some(id) => active_touches(&touches).find(|t| t.identifier() == id),
                    None => touches.item(0),
                };
                touch.map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
            }
        }
    }
}

fn active_touches(list: &TouchList) -> impl Iterator<Item = Touch> + '_ {
    (0..list.length()).filter_map(|i| list.item(i))
}

/// Whether the driving finger has left the surface, given the identifiers of
/// the touches still down. Before a finger is pinned only an empty surface
/// counts as lifted.
fn primary_lifted(primary: Option<i32>, mut remaining: impl Iterator<Item = i32>) -> bool {
    match primary {
        Some(id) => !remaining.any(|r| r == id),
        None => remaining.next().is_none(),
    }
}

/// Callbacks a live drag forwards its move and end signals to.
#[derive(Clone)]
pub struct DragHandlers {
    pub on_move: Rc<dyn Fn(Point)>,
    pub on_end: Rc<dyn Fn()>,
}

/// Input listeners held for the duration of one drag. Dropping the guard
/// removes every listener it installed.
pub struct DragSubscription {
    kind: InputKind,
    _listeners: Vec<EventListener>,
}

impl DragSubscription {
    /// Mouse drags listen on the window so the pointer may leave the gear.
    /// Touch input is already captured by the element the touch began on.
    pub fn acquire(kind: InputKind, element: &Element, handlers: DragHandlers) -> Self {
        let listeners = match kind {
            InputKind::Pointer => match web_sys::window() {
                Some(window) => pointer_listeners(&window, handlers),
                None => {
                    log::warn!("no window, pointer drag cannot be tracked");
                    Vec::new()
                }
            },
            InputKind::Touch => touch_listeners(element, handlers),
        };
        log::debug!("acquired {} {:?} drag listeners", listeners.len(), kind);
        Self {
            kind,
            _listeners: listeners,
        }
    }
}

impl Drop for DragSubscription {
    fn drop(&mut self) {
        log::debug!("released {:?} drag listeners", self.kind);
    }
}

fn pointer_listeners(window: &web_sys::Window, handlers: DragHandlers) -> Vec<EventListener> {
    let on_move = handlers.on_move;
    let moved = EventListener::new(window, "mousemove", move |event: &Event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        if let Some(point) = PositionSource::Pointer(event).position() {
            on_move(point);
        }
    });
    let on_end = handlers.on_end;
    let released = EventListener::new(window, "mouseup", move |_event: &Event| on_end());
    vec![moved, released]
}

fn touch_listeners(element: &Element, handlers: DragHandlers) -> Vec<EventListener> {
    // identifier of the finger driving this drag, pinned on its first move
    let primary = Rc::new(Cell::new(None::<i32>));
    let on_move = handlers.on_move;
    let moved = {
        let primary = primary.clone();
        EventListener::new_with_options(
            element,
            "touchmove",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                event.prevent_default();
                if primary.get().is_none() {
                    primary.set(event.touches().item(0).map(|t| t.identifier()));
                }
                if let Some(point) = PositionSource::Touch(event).position_of(primary.get()) {
                    on_move(point);
                }
            },
        )
    };
    let mut listeners = vec![moved];
    // a platform-interrupted touch ends the gesture exactly like a lift
    for name in ["touchend", "touchcancel"] {
        let on_end = handlers.on_end.clone();
        let primary = primary.clone();
        listeners.push(EventListener::new(element, name, move |event: &Event| {
            let Some(event) = event.dyn_ref::<TouchEvent>() else {
                on_end();
                return;
            };
            let touches = event.touches();
            let remaining = active_touches(&touches).map(|t| t.identifier());
            if primary_lifted(primary.get(), remaining) {
                on_end();
            } else {
                log::trace!("secondary touch lifted, gesture continues");
            }
        }));
    }
    listeners
}
