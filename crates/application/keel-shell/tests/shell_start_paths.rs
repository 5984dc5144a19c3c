use std::cell::RefCell;
use std::rc::Rc;

use keel_shell::{
    ActivationContext, BlankSurface, ExceptionInfo, Navigable, NavigationEntry, NavigationMode,
    NavigationRegistry, PreviousExecutionState, Shell, ShellDelegate, ShellState, StartReason,
    Surface, SuspendInfo,
};

#[derive(Default)]
struct HostLog {
    starts: Vec<StartReason>,
    initializes: usize,
    suspends: Vec<Option<u64>>,
    exceptions: Vec<String>,
}

struct Host {
    log: Rc<RefCell<HostLog>>,
    /// Pages navigated to on every start dispatch, through the registry.
    start_pages: Vec<&'static str>,
    /// Surface handed back from `on_initialize`, winning over the factory.
    injected: Option<Box<dyn Surface>>,
}

impl Host {
    fn new(log: &Rc<RefCell<HostLog>>) -> Self {
        Self {
            log: Rc::clone(log),
            start_pages: Vec::new(),
            injected: None,
        }
    }
}

impl ShellDelegate for Host {
    fn on_initialize(&mut self, _ctx: &ActivationContext) -> Option<Box<dyn Surface>> {
        self.log.borrow_mut().initializes += 1;
        self.injected.take()
    }

    fn on_start(
        &mut self,
        reason: StartReason,
        _ctx: &ActivationContext,
        nav: &mut NavigationRegistry,
    ) {
        self.log.borrow_mut().starts.push(reason);
        if let Ok(coordinator) = nav.default_coordinator_mut() {
            for page in &self.start_pages {
                coordinator.navigate(*page, None, false).unwrap();
            }
        }
    }

    fn on_suspending(&mut self, info: &SuspendInfo) {
        self.log.borrow_mut().suspends.push(info.deadline_ms);
    }

    fn on_unhandled_exception(&mut self, info: &ExceptionInfo) {
        self.log.borrow_mut().exceptions.push(info.message.clone());
    }
}

struct CountingSurface {
    rendered: Rc<RefCell<Vec<String>>>,
}

impl Surface for CountingSurface {
    fn render(&mut self, entry: &NavigationEntry, mode: NavigationMode) -> Option<Box<dyn Navigable>> {
        self.rendered
            .borrow_mut()
            .push(format!("{}:{mode:?}", entry.page()));
        None
    }
}

fn shell_with_factory_counter(
    host: Host,
    built: &Rc<RefCell<usize>>,
) -> Shell {
    let built = Rc::clone(built);
    Shell::builder(host)
        .surface_factory(move |_ctx| {
            *built.borrow_mut() += 1;
            Box::new(BlankSurface)
        })
        .build()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn cold_launch_builds_one_surface_and_dispatches_launch() {
    init_tracing();
    let log = Rc::new(RefCell::new(HostLog::default()));
    let built = Rc::new(RefCell::new(0));
    let mut shell = shell_with_factory_counter(Host::new(&log), &built);

    assert_eq!(shell.state(), ShellState::NotStarted);
    shell.launched(PreviousExecutionState::NotRunning, &ActivationContext::default());

    assert_eq!(*built.borrow(), 1);
    assert_eq!(log.borrow().initializes, 1);
    assert_eq!(log.borrow().starts, vec![StartReason::Launch]);
    assert_eq!(shell.state(), ShellState::Running);
}

#[test]
fn launch_while_previously_running_reuses_the_surface() {
    let log = Rc::new(RefCell::new(HostLog::default()));
    let built = Rc::new(RefCell::new(0));
    let mut shell = shell_with_factory_counter(Host::new(&log), &built);

    shell.launched(PreviousExecutionState::Running, &ActivationContext::default());

    assert_eq!(*built.borrow(), 0);
    assert_eq!(log.borrow().starts, vec![StartReason::Activate]);
}

#[test]
fn relaunch_after_termination_behaves_like_a_cold_launch() {
    let log = Rc::new(RefCell::new(HostLog::default()));
    let built = Rc::new(RefCell::new(0));
    let mut shell = shell_with_factory_counter(Host::new(&log), &built);

    shell.launched(PreviousExecutionState::NotRunning, &ActivationContext::default());
    shell.launched(PreviousExecutionState::Terminated, &ActivationContext::default());

    // on_initialize runs on every surface-building path, the surface is
    // built exactly once.
    assert_eq!(log.borrow().initializes, 2);
    assert_eq!(*built.borrow(), 1);
    assert_eq!(
        log.borrow().starts,
        vec![StartReason::Launch, StartReason::Launch]
    );
}

#[test]
fn activation_before_any_launch_builds_the_surface_first() {
    let log = Rc::new(RefCell::new(HostLog::default()));
    let built = Rc::new(RefCell::new(0));
    let mut shell = shell_with_factory_counter(Host::new(&log), &built);

    shell.activated(&ActivationContext::default());

    assert_eq!(*built.borrow(), 1);
    assert_eq!(log.borrow().starts, vec![StartReason::Activate]);
    assert_eq!(shell.state(), ShellState::Running);
}

#[test]
fn injected_surface_wins_over_the_factory() {
    let log = Rc::new(RefCell::new(HostLog::default()));
    let rendered = Rc::new(RefCell::new(Vec::new()));
    let built = Rc::new(RefCell::new(0));

    let mut host = Host::new(&log);
    host.start_pages = vec!["home"];
    host.injected = Some(Box::new(CountingSurface {
        rendered: Rc::clone(&rendered),
    }));

    let mut shell = shell_with_factory_counter(host, &built);
    shell.launched(PreviousExecutionState::NotRunning, &ActivationContext::default());

    assert_eq!(*built.borrow(), 0, "factory must not run for an injected surface");
    assert_eq!(*rendered.borrow(), ["home:New"]);
}

#[test]
fn unclassified_previous_state_launches_fresh_without_back_subscription() {
    let log = Rc::new(RefCell::new(HostLog::default()));
    let built = Rc::new(RefCell::new(0));
    let mut host = Host::new(&log);
    host.start_pages = vec!["a", "b"];
    let mut shell = shell_with_factory_counter(host, &built);

    shell.launched(PreviousExecutionState::Suspended, &ActivationContext::default());

    assert_eq!(*built.borrow(), 1);
    assert_eq!(log.borrow().starts, vec![StartReason::Launch]);
    assert_eq!(shell.state(), ShellState::Running);

    // This arm never subscribes back handling: history exists, yet the
    // request stays unhandled.
    assert!(shell
        .navigation()
        .default_coordinator()
        .unwrap()
        .can_go_back());
    assert!(!shell.back_requested());
}

#[test]
fn back_requests_are_unhandled_until_a_launch_subscribes() {
    let log = Rc::new(RefCell::new(HostLog::default()));
    let mut host = Host::new(&log);
    host.start_pages = vec!["a", "b"];
    let mut shell = Shell::builder(host).build();

    assert!(!shell.back_requested());

    shell.launched(PreviousExecutionState::NotRunning, &ActivationContext::default());

    assert!(shell.back_requested());
    let current = shell
        .navigation()
        .default_coordinator()
        .unwrap()
        .current()
        .unwrap()
        .page()
        .as_str()
        .to_string();
    assert_eq!(current, "a");

    // History exhausted: the platform applies its own default.
    assert!(!shell.back_requested());
}

#[test]
fn suspend_and_exception_signals_pass_through_verbatim() {
    let log = Rc::new(RefCell::new(HostLog::default()));
    let mut shell = Shell::builder(Host::new(&log)).build();
    shell.launched(PreviousExecutionState::NotRunning, &ActivationContext::default());

    shell.suspending(&SuspendInfo {
        deadline_ms: Some(5_000),
    });
    assert_eq!(shell.state(), ShellState::Suspended);
    assert_eq!(log.borrow().suspends, vec![Some(5_000)]);

    shell.unhandled_exception(&ExceptionInfo {
        message: "boom".to_string(),
    });
    assert_eq!(log.borrow().exceptions, vec!["boom".to_string()]);

    shell.terminated();
    assert_eq!(shell.state(), ShellState::Terminated);
}

#[test]
fn visibility_and_activation_flags_track_the_window() {
    let log = Rc::new(RefCell::new(HostLog::default()));
    let mut shell = Shell::builder(Host::new(&log)).build();

    assert!(shell.is_active());
    assert!(!shell.is_minimized());

    shell.visibility_changed(false);
    assert!(shell.is_minimized());
    shell.visibility_changed(true);
    assert!(!shell.is_minimized());

    shell.activation_changed(true);
    assert!(!shell.is_active());
    shell.activation_changed(false);
    assert!(shell.is_active());
}
