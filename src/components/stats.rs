use log::{info, warn};
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::use_interval;

use crate::config;
use crate::content::Stat;
use crate::viewport::{ViewportWatcher, WatchOptions};

pub const STATS_OPTIONS: WatchOptions = WatchOptions {
    threshold: config::STATS_THRESHOLD,
    root_margin: None,
};

/// Reads a counter goal the way `data-target` values are read in the
/// browser: leading whitespace, an optional sign, then decimal digits (or
/// `0x` and hex digits) up to the first other character. Zero and text
/// without digits give `None`, which leaves that counter untouched.
pub fn parse_target(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, s) = if s.starts_with("0x") || s.starts_with("0X") {
        (16, &s[2..])
    } else {
        (10, s)
    };

    let end = s.find(|c: char| !c.is_digit(radix)).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let magnitude = i64::from_str_radix(&s[..end], radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    (value != 0).then(|| value)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    pub finished: bool,
}

/// Linear count from zero to a goal over a fixed number of ticks.
/// Each tick adds the same step regardless of how late it fires.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    step: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        let ticks = f64::from(config::COUNTER_DURATION_MS) / f64::from(config::COUNTER_TICK_MS);
        CounterAnimation {
            target,
            step: target as f64 / ticks,
            current: 0.0,
        }
    }

    pub fn tick(&mut self) -> CounterFrame {
        self.current += self.step;
        if self.current >= self.target as f64 {
            CounterFrame {
                value: self.target,
                finished: true,
            }
        } else {
            CounterFrame {
                value: self.current.floor() as i64,
                finished: false,
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    /// True the first time only.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[derive(Properties, PartialEq)]
struct StatNumberProps {
    target: String,
    text: String,
    started: bool,
}

#[function_component(StatNumber)]
fn stat_number(props: &StatNumberProps) -> Html {
    let animation = use_mut_ref(|| None::<CounterAnimation>);
    let display = use_state_eq(|| None::<i64>);
    let running = use_state_eq(|| false);

    {
        let animation = animation.clone();
        let running = running.clone();
        let target = props.target.clone();
        use_effect_with_deps(move |started| {
            if *started {
                if let Some(goal) = parse_target(&target) {
                    *animation.borrow_mut() = Some(CounterAnimation::new(goal));
                    running.set(true);
                }
            }
            || ()
        }, props.started);
    }

    {
        let display = display.clone();
        let running = running.clone();
        let delay = if *running { config::COUNTER_TICK_MS } else { 0 };
        use_interval(
            move || {
                let frame = match animation.borrow_mut().as_mut() {
                    Some(animation) => animation.tick(),
                    None => return,
                };
                display.set(Some(frame.value));
                if frame.finished {
                    running.set(false);
                }
            },
            delay,
        );
    }

    let text = match *display {
        Some(value) => value.to_string(),
        None => props.text.clone(),
    };

    html! {
        <span class="stat-number" data-target={props.target.clone()}>{ text }</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsSectionProps {
    pub stats: Vec<Stat>,
}

/// Counters that run once, the first time half the section is on screen.
#[function_component(StatsSection)]
pub fn stats_section(props: &StatsSectionProps) -> Html {
    let node = use_node_ref();
    let guard = use_mut_ref(OneShot::default);
    let started = use_state_eq(|| false);

    {
        let node = node.clone();
        let started = started.clone();
        use_effect_with_deps(move |_| {
            let watcher = node.cast::<Element>().and_then(|section| {
                let watcher = ViewportWatcher::new(STATS_OPTIONS, move |entry, observer| {
                    if entry.is_intersecting() && guard.borrow_mut().fire() {
                        observer.disconnect();
                        info!("Stats in view, starting counters");
                        started.set(true);
                    }
                });
                match watcher {
                    Ok(watcher) => {
                        watcher.observe(&section);
                        Some(watcher)
                    }
                    Err(e) => {
                        warn!("Stats counter disabled: {}", e);
                        None
                    }
                }
            });

            move || drop(watcher)
        }, ());
    }

    html! {
        <section class="stats" ref={node}>
            <div class="stats-grid">
                { for props.stats.iter().map(|stat| html! {
                    <div class="stat-item">
                        <div class="stat-value">
                            <StatNumber
                                target={stat.target.clone()}
                                text={stat.text.clone()}
                                started={*started}
                            />
                            <span class="stat-suffix">{ stat.suffix.clone() }</span>
                        </div>
                        <p class="stat-label">{ stat.label.clone() }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(target: i64) -> Vec<CounterFrame> {
        let mut animation = CounterAnimation::new(target);
        let mut frames = Vec::new();
        loop {
            let frame = animation.tick();
            frames.push(frame);
            if frame.finished || frames.len() > 1000 {
                break;
            }
        }
        frames
    }

    #[test]
    fn parses_plain_goals() {
        assert_eq!(parse_target("100"), Some(100));
        assert_eq!(parse_target("  42"), Some(42));
        assert_eq!(parse_target("+7"), Some(7));
        assert_eq!(parse_target("-5"), Some(-5));
    }

    #[test]
    fn ignores_trailing_text() {
        assert_eq!(parse_target("95%"), Some(95));
        assert_eq!(parse_target("1200 alumnos"), Some(1200));
        assert_eq!(parse_target("3.9"), Some(3));
        assert_eq!(parse_target("0x1F"), Some(31));
    }

    #[test]
    fn zero_and_garbage_skip_the_counter() {
        assert_eq!(parse_target("0"), None);
        assert_eq!(parse_target("-0"), None);
        assert_eq!(parse_target(""), None);
        assert_eq!(parse_target("abc"), None);
        assert_eq!(parse_target("-"), None);
        assert_eq!(parse_target("0x"), None);
        assert_eq!(parse_target("99999999999999999999999"), None);
    }

    #[test]
    fn counts_up_to_exactly_the_goal() {
        let frames = run(100);
        let last = frames.last().unwrap();
        assert!(last.finished);
        assert_eq!(last.value, 100);
        assert!(frames[..frames.len() - 1].iter().all(|f| !f.finished));
        assert!(frames.windows(2).all(|w| w[0].value <= w[1].value));
    }

    #[test]
    fn takes_about_two_seconds_of_ticks() {
        let ticks = run(1200).len();
        assert!((125..=126).contains(&ticks), "{} ticks", ticks);
    }

    #[test]
    fn intermediate_values_are_floored() {
        let mut animation = CounterAnimation::new(100);
        // step is 0.8
        assert_eq!(animation.tick().value, 0);
        assert_eq!(animation.tick().value, 1);
        assert_eq!(animation.tick().value, 2);
        assert_eq!(animation.tick().value, 3);
    }

    #[test]
    fn ticking_after_the_end_stays_at_the_goal() {
        let mut animation = CounterAnimation::new(16);
        while !animation.tick().finished {}
        assert_eq!(
            animation.tick(),
            CounterFrame {
                value: 16,
                finished: true
            }
        );
    }

    #[test]
    fn negative_goal_snaps_on_first_tick() {
        let frames = run(-5);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].value, -5);
    }

    #[test]
    fn one_shot_fires_once() {
        let mut guard = OneShot::default();
        assert!(!guard.has_fired());
        assert!(guard.fire());
        assert!(!guard.fire());
        assert!(!guard.fire());
        assert!(guard.has_fired());
    }

    #[test]
    fn counters_wait_for_half_the_section() {
        assert_eq!(STATS_OPTIONS.threshold, 0.5);
        assert_eq!(STATS_OPTIONS.root_margin, None);
    }
}
