//! Cooperative per-frame task scheduler.
//!
//! Tasks are typed state machines polled once per tick in ascending
//! (priority, insertion) order; each poll returns Continue or Done.
//! No task preempts another, so tasks mutate shared state without
//! synchronization. Names are unique: re-adding an existing name is
//! ignored, and removal/existence checks go by name.

use hecs::Entity;

use nova_core::constants::DEFAULT_TASK_PRIORITY;
use nova_core::enums::ShipControl;
use nova_core::types::Position;

/// What a task poll tells the scheduler to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Run again next tick.
    Continue,
    /// Deregister permanently.
    Done,
}

/// Per-kind task state. The engine dispatches each variant to its
/// controller system.
#[derive(Debug, Clone)]
pub enum TaskKind {
    /// Held ship movement/turn control.
    Control { control: ShipControl },
    /// Refills the missile bay once the cooldown elapses.
    Reload,
    /// Scale-down-and-detach lifecycle for a hit planet or station.
    Shrink { target: Entity, scale_step: f64 },
    /// Particle effect ramp at a contact point.
    Explosion { position: Position, started: bool },
    /// Recomputes an orbiter's position from its path function.
    Orbit { entity: Entity },
    /// Drains finished missiles from the registry.
    MissileCleanup,
}

/// A named, scheduled task.
#[derive(Debug, Clone)]
pub struct Task {
    pub name: String,
    /// Lower priority values run earlier in the tick.
    pub priority: i32,
    /// Remaining delay before the first poll (seconds).
    pub delay_secs: f64,
    /// Task-local time since the first poll (seconds).
    pub elapsed_secs: f64,
    pub kind: TaskKind,
    seq: u64,
}

impl Task {
    pub fn new(name: &str, priority: i32, kind: TaskKind) -> Self {
        Self {
            name: name.to_string(),
            priority,
            delay_secs: 0.0,
            elapsed_secs: 0.0,
            kind,
            seq: 0,
        }
    }
}

/// Priority-ordered named task registry.
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<Task>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task. Returns false (and does nothing) if a task
    /// with the same name already exists.
    pub fn add(&mut self, mut task: Task) -> bool {
        if self.has_task(&task.name) {
            log::debug!("task '{}' already scheduled, ignoring", task.name);
            return false;
        }
        task.seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.push(task);
        true
    }

    /// Register a task whose first poll happens after `delay` seconds.
    pub fn add_later(&mut self, delay_secs: f64, mut task: Task) -> bool {
        task.delay_secs = delay_secs.max(0.0);
        self.add(task)
    }

    /// Convenience: a default-priority task.
    pub fn add_default(&mut self, name: &str, kind: TaskKind) -> bool {
        self.add(Task::new(name, DEFAULT_TASK_PRIORITY, kind))
    }

    /// Deregister by name. Returns whether a task was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.name != name);
        before != self.tasks.len()
    }

    pub fn has_task(&self, name: &str) -> bool {
        self.tasks.iter().any(|t| t.name == name)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Take every task for this tick, sorted into execution order.
    /// The engine runs them and hands survivors back via `restore`.
    pub fn take_tasks(&mut self) -> Vec<Task> {
        let mut tasks = std::mem::take(&mut self.tasks);
        tasks.sort_by_key(|t| (t.priority, t.seq));
        tasks
    }

    /// Return surviving tasks after a tick. Tasks added while the
    /// batch was out (there are none today) are preserved.
    pub fn restore(&mut self, survivors: Vec<Task>) {
        self.tasks.extend(survivors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(name: &str, priority: i32) -> Task {
        Task::new(name, priority, TaskKind::MissileCleanup)
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let mut scheduler = Scheduler::new();
        assert!(scheduler.add(probe("reload", 0)));
        assert!(!scheduler.add(probe("reload", 0)));
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn test_remove_by_name() {
        let mut scheduler = Scheduler::new();
        scheduler.add(probe("left-turn", 0));
        assert!(scheduler.has_task("left-turn"));
        assert!(scheduler.remove("left-turn"));
        assert!(!scheduler.has_task("left-turn"));
        assert!(!scheduler.remove("left-turn"));
    }

    #[test]
    fn test_execution_order_is_priority_then_insertion() {
        let mut scheduler = Scheduler::new();
        scheduler.add(probe("late", 34));
        scheduler.add(probe("first", 0));
        scheduler.add(probe("second", 0));
        scheduler.add(probe("earliest", -1));

        let order: Vec<String> = scheduler
            .take_tasks()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(order, vec!["earliest", "first", "second", "late"]);
    }

    #[test]
    fn test_restore_round_trips() {
        let mut scheduler = Scheduler::new();
        scheduler.add(probe("a", 0));
        scheduler.add(probe("b", 0));
        let tasks = scheduler.take_tasks();
        assert!(scheduler.is_empty());
        scheduler.restore(tasks);
        assert_eq!(scheduler.len(), 2);
        assert!(scheduler.has_task("a"));
        assert!(scheduler.has_task("b"));
    }

    #[test]
    fn test_add_later_sets_delay() {
        let mut scheduler = Scheduler::new();
        scheduler.add_later(0.45, probe("reload", 0));
        let tasks = scheduler.take_tasks();
        assert!((tasks[0].delay_secs - 0.45).abs() < 1e-12);
    }
}
