use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};
use web_sys::{Element, MouseEvent, TouchEvent};
use yew::prelude::*;

use super::gear_view::GearView;
use crate::config::GearConfig;
use crate::input::{DragHandlers, DragSubscription, InputKind, PositionSource};
use crate::model::{Point, ScrollCommand};
use crate::state::{GearController, RotationSpring, SpringConfig};

#[derive(Properties, PartialEq, Clone)]
pub struct GearScrollProps {
    pub on_scroll: Callback<ScrollCommand>,
    #[prop_or_default]
    pub config: GearConfig,
}

fn begin_gesture(
    controller: &RefCell<GearController>,
    gear_ref: &NodeRef,
    dragging: &UseStateHandle<Option<InputKind>>,
    source: PositionSource<'_>,
) {
    let Some(point) = source.position() else {
        return;
    };
    if controller.borrow_mut().start(gear_ref, point) {
        dragging.set(Some(source.kind()));
    }
}

/// Eases the drawn angle toward the accumulated rotation. Frames are only
/// requested while the spring still has somewhere to go.
struct SpringLoop {
    controller: Rc<RefCell<GearController>>,
    spring: RefCell<RotationSpring>,
    config: Cell<SpringConfig>,
    drawn_rotation: UseStateHandle<f64>,
    last_timestamp: Cell<Option<f64>>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl SpringLoop {
    fn queue(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let this = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            this.frame.borrow_mut().take();
            this.tick(timestamp);
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn tick(self: &Rc<Self>, timestamp: f64) {
        let dt = self
            .last_timestamp
            .replace(Some(timestamp))
            .map_or(0.0, |prev| (timestamp - prev) / 1000.0);
        let target = self.controller.borrow().rotation_deg();
        let (before, drawn, settled) = {
            let mut spring = self.spring.borrow_mut();
            let before = spring.position();
            let drawn = spring.step(target, dt, &self.config.get());
            (before, drawn, spring.is_at_rest(target))
        };
        if drawn != before {
            self.drawn_rotation.set(drawn);
        }
        if settled {
            self.last_timestamp.set(None);
        } else {
            self.queue();
        }
    }

    fn cancel(&self) {
        self.frame.borrow_mut().take();
        self.last_timestamp.set(None);
    }
}

#[function_component(GearScroll)]
pub fn gear_scroll(props: &GearScrollProps) -> Html {
    let gear_ref = use_node_ref();
    let controller = use_mut_ref(GearController::default);
    let dragging = use_state(|| None::<InputKind>);
    let drawn_rotation = use_state(|| 0.0_f64);
    let spring_loop = {
        let controller = controller.clone();
        let drawn_rotation = drawn_rotation.clone();
        let config = props.config.spring;
        use_memo((), move |_| SpringLoop {
            controller,
            spring: RefCell::new(RotationSpring::default()),
            config: Cell::new(config),
            drawn_rotation,
            last_timestamp: Cell::new(None),
            frame: RefCell::new(None),
        })
    };
    // long-lived listeners read the newest callback through this
    let on_scroll_ref = use_mut_ref(|| props.on_scroll.clone());
    *on_scroll_ref.borrow_mut() = props.on_scroll.clone();

    // Input subscription lives exactly as long as the drag it belongs to.
    {
        let controller = controller.clone();
        let gear_ref = gear_ref.clone();
        let dragging_handle = dragging.clone();
        let on_scroll_ref = on_scroll_ref.clone();
        let spring_loop = spring_loop.clone();
        use_effect_with(*dragging, move |kind| {
            let subscription = match (*kind, gear_ref.cast::<Element>()) {
                (Some(kind), Some(element)) => {
                    let on_move = {
                        let controller = controller.clone();
                        Rc::new(move |point: Point| {
                            let command = controller.borrow_mut().move_to(point);
                            spring_loop.queue();
                            if let Some(command) = command {
                                on_scroll_ref.borrow().emit(command);
                            }
                        })
                    };
                    let on_end = {
                        let dragging = dragging_handle.clone();
                        Rc::new(move || {
                            controller.borrow_mut().end();
                            dragging.set(None);
                        })
                    };
                    Some(DragSubscription::acquire(
                        kind,
                        &element,
                        DragHandlers { on_move, on_end },
                    ))
                }
                (Some(_), None) => {
                    if controller.borrow().is_active() {
                        log::warn!("gear element vanished mid-drag, ending gesture");
                    }
                    controller.borrow_mut().end();
                    dragging_handle.set(None);
                    None
                }
                (None, _) => None,
            };
            move || drop(subscription)
        });
    }

    // Picks up config changes and stops any pending frame on unmount.
    {
        let spring_loop = spring_loop.clone();
        use_effect_with(props.config.spring, move |config| {
            spring_loop.config.set(*config);
            spring_loop.queue();
            move || spring_loop.cancel()
        });
    }

    let onmousedown = {
        let controller = controller.clone();
        let gear_ref = gear_ref.clone();
        let dragging = dragging.clone();
        Callback::from(move |e: MouseEvent| {
            if e.button() != 0 {
                return;
            }
            // keeps the drag from selecting page text
            e.prevent_default();
            begin_gesture(&controller, &gear_ref, &dragging, PositionSource::Pointer(&e));
        })
    };
    let ontouchstart = {
        let controller = controller.clone();
        let gear_ref = gear_ref.clone();
        let dragging = dragging.clone();
        Callback::from(move |e: TouchEvent| {
            begin_gesture(&controller, &gear_ref, &dragging, PositionSource::Touch(&e));
        })
    };

    let tooltip_opacity = if dragging.is_some() { 0.0 } else { 0.7 };

    html! {
        <div
            ref={gear_ref}
            class="gear-scroll"
            style="position:fixed; right:32px; top:50%; width:128px; height:128px; z-index:40; user-select:none; touch-action:none; cursor:grab;"
            {onmousedown}
            {ontouchstart}
        >
            <div class="gear-glow" style="position:absolute; inset:0; border-radius:50%;"></div>
            <GearView spec={props.config.gear} rotation_deg={*drawn_rotation} />
            <div
                class="gear-tooltip"
                style={format!("position:absolute; right:calc(100% + 12px); top:50%; transform:translateY(-50%); font-family:monospace; font-size:12px; white-space:nowrap; pointer-events:none; transition:opacity 0.3s; opacity:{tooltip_opacity};")}
            >
                { props.config.tooltip.clone() }
            </div>
        </div>
    }
}
