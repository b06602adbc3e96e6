use std::cell::RefCell;
use std::rc::Rc;

use swatch_core::element::{elements, elements_mut, BoxedElement, Element, ElementBase, LocaleSwitchable, SchemeSwitchable, Update};
use swatch_core::kurbo::Point;
use swatch_core::locale::Locale;
use swatch_core::painter::Painter;
use swatch_core::propagate::{apply_locale, apply_scheme, take_updates};
use swatch_theme::{style_record, Color, SchemeId, SchemeState, ThemeError, ThemeResult, WidgetId};

style_record! {
    struct ProbeStyle {
        background,
    }
}

type VisitLog = Rc<RefCell<Vec<String>>>;

struct Probe {
    name: &'static str,
    base: ElementBase,
    style: SchemeState<ProbeStyle>,
    switchable: bool,
    children: Vec<BoxedElement>,
    auxiliary: Vec<BoxedElement>,
    log: VisitLog,
}

impl Probe {
    fn new(name: &'static str, log: &VisitLog) -> Self {
        Self {
            name,
            base: ElementBase::new(Locale::default()),
            style: SchemeState::new(
                WidgetId::new("test", name),
                ProbeStyle { background: Color::WHITE },
                ProbeStyle { background: Color::BLACK },
            ),
            switchable: true,
            children: Vec::new(),
            auxiliary: Vec::new(),
            log: log.clone(),
        }
    }

    fn light_only(name: &'static str, log: &VisitLog) -> Self {
        let mut probe = Self::new(name, log);
        probe.style = SchemeState::light_only(
            WidgetId::new("test", name),
            ProbeStyle { background: Color::WHITE },
        );
        probe
    }

    fn inert(name: &'static str, log: &VisitLog) -> Self {
        let mut probe = Self::new(name, log);
        probe.switchable = false;
        probe
    }

    fn child(mut self, child: Probe) -> Self {
        self.children.push(Box::new(child));
        self
    }

    fn auxiliary(mut self, child: Probe) -> Self {
        self.auxiliary.push(Box::new(child));
        self
    }
}

impl Element for Probe {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("test", self.name)
    }

    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }

    fn paint(&self, _painter: &mut dyn Painter, _origin: Point) {}

    fn scheme_switchable(&mut self) -> Option<&mut dyn SchemeSwitchable> {
        if self.switchable {
            Some(self)
        } else {
            None
        }
    }

    fn locale_switchable(&mut self) -> Option<&mut dyn LocaleSwitchable> {
        if self.switchable {
            Some(self)
        } else {
            None
        }
    }

    fn children_mut(&mut self) -> Vec<&mut dyn Element> {
        elements_mut(&mut self.children)
    }

    fn auxiliary_mut(&mut self) -> Vec<&mut dyn Element> {
        elements_mut(&mut self.auxiliary)
    }

    fn children(&self) -> Vec<&dyn Element> {
        elements(&self.children)
    }
}

impl SchemeSwitchable for Probe {
    fn apply_own_scheme(&mut self, scheme: &SchemeId) -> ThemeResult<()> {
        self.log.borrow_mut().push(self.name.to_string());
        self.style.apply(scheme)?;
        Ok(())
    }

    fn active_scheme(&self) -> &SchemeId {
        self.style.active()
    }
}

impl LocaleSwitchable for Probe {
    fn apply_own_locale(&mut self, _locale: &Locale) {
        self.log.borrow_mut().push(self.name.to_string());
    }
}

fn visited(log: &VisitLog) -> Vec<String> {
    log.borrow().clone()
}

fn scheme_of(root: &mut Probe, index: usize) -> SchemeId {
    let child = root.children_mut().into_iter().nth(index).unwrap();
    let scheme = child.scheme_switchable().unwrap().active_scheme().clone();
    scheme
}

#[test]
fn test_failure_stops_at_first_unregistered_child() {
    let log = VisitLog::default();
    let mut root = Probe::new("C", &log)
        .child(Probe::new("c1", &log))
        .child(Probe::light_only("c2", &log))
        .child(Probe::new("c3", &log));

    let err = apply_scheme(&mut root, &SchemeId::dark()).unwrap_err();
    match err {
        ThemeError::UnregisteredScheme { element, scheme } => {
            assert_eq!(element, WidgetId::new("test", "c2"));
            assert_eq!(scheme, SchemeId::dark());
        }
        other => panic!("unexpected error {other:?}"),
    }

    assert_eq!(visited(&log), ["C", "c1", "c2"]);
    assert_eq!(root.style.current().background, Color::BLACK);
    assert_eq!(scheme_of(&mut root, 0), SchemeId::dark());
    assert_eq!(scheme_of(&mut root, 1), SchemeId::light());
    assert_eq!(scheme_of(&mut root, 2), SchemeId::light());
}

#[test]
fn test_pre_order_with_auxiliary_after_children() {
    let log = VisitLog::default();
    let mut root = Probe::new("root", &log)
        .child(Probe::new("a", &log).child(Probe::new("a1", &log)))
        .child(Probe::new("b", &log))
        .auxiliary(Probe::new("popup", &log).child(Probe::new("item", &log)));

    apply_scheme(&mut root, &SchemeId::dark()).unwrap();
    assert_eq!(visited(&log), ["root", "a", "a1", "b", "popup", "item"]);
}

#[test]
fn test_elements_without_capability_are_skipped_with_their_subtree() {
    let log = VisitLog::default();
    let mut root = Probe::new("root", &log)
        .child(Probe::inert("chrome", &log).child(Probe::new("hidden", &log)))
        .child(Probe::new("content", &log));

    apply_scheme(&mut root, &SchemeId::dark()).unwrap();
    assert_eq!(visited(&log), ["root", "content"]);

    log.borrow_mut().clear();
    apply_locale(&mut root, &Locale::new("en"));
    assert_eq!(visited(&log), ["root", "content"]);
}

#[test]
fn test_apply_scheme_twice_is_idempotent() {
    let log = VisitLog::default();
    let mut root = Probe::new("root", &log).child(Probe::new("a", &log));

    apply_scheme(&mut root, &SchemeId::dark()).unwrap();
    let first = *root.style.current();
    apply_scheme(&mut root, &SchemeId::dark()).unwrap();
    assert_eq!(*root.style.current(), first);
    assert_eq!(root.style.active(), &SchemeId::dark());
}

#[test]
fn test_locale_is_recorded_and_repaint_requested() {
    let log = VisitLog::default();
    let mut root = Probe::new("root", &log).child(Probe::new("a", &log));
    take_updates(&mut root);

    apply_locale(&mut root, &Locale::new("en_US"));
    assert_eq!(root.base().locale().as_str(), "en_us");
    assert_eq!(root.children()[0].base().locale().as_str(), "en_us");
    assert!(take_updates(&mut root).contains(Update::DRAW));
}
