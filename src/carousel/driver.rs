use std::time::Duration;

use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
    time::{interval_at, sleep, Instant, MissedTickBehavior},
};

use crate::{
    constants::{CAROUSEL_COOLDOWN_MS, CAROUSEL_TICK_MS},
    controller::{Carousel, CarouselMode, CarouselState, CooldownToken},
    error::CarouselError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselTimings {
    pub tick: Duration,
    pub cooldown: Duration,
}

impl Default for CarouselTimings {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(CAROUSEL_TICK_MS),
            cooldown: Duration::from_millis(CAROUSEL_COOLDOWN_MS),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Command {
    Next,
    Prev,
    GoTo(usize),
}

/// Owns a [`Carousel`] on its own task. Navigation is sent as commands so the
/// autoplay timer and manual input never race; state changes are published on
/// a watch channel. Dropping the handle cancels the task and its timers.
pub struct CarouselHandle {
    len: usize,
    commands: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<CarouselState>,
    task: JoinHandle<()>,
}

impl CarouselHandle {
    pub fn spawn(len: usize, timings: CarouselTimings) -> Result<Self, CarouselError> {
        let carousel = Carousel::new(len)?;
        let (commands, receiver) = mpsc::unbounded_channel();
        let (publisher, state) = watch::channel(carousel.state());

        let task = tokio::spawn(run(carousel, timings, receiver, publisher));
        log::trace!("> Carousel started with {len} slides");

        Ok(Self {
            len,
            commands,
            state,
            task,
        })
    }

    pub fn next(&self) {
        self.send(Command::Next);
    }

    pub fn prev(&self) {
        self.send(Command::Prev);
    }

    pub fn go_to(&self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.send(Command::GoTo(index));
        Ok(())
    }

    pub fn state(&self) -> CarouselState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<CarouselState> {
        self.state.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            log::error!("Carousel task is gone, dropped {command:?}");
        }
    }
}

impl Drop for CarouselHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    mut carousel: Carousel,
    timings: CarouselTimings,
    mut commands: mpsc::UnboundedReceiver<Command>,
    publisher: watch::Sender<CarouselState>,
) {
    let mut ticker = interval_at(Instant::now() + timings.tick, timings.tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let cooldown = sleep(timings.cooldown);
    tokio::pin!(cooldown);
    let mut pending: Option<CooldownToken> = None;

    loop {
        tokio::select! {
            _ = ticker.tick(), if carousel.mode() == CarouselMode::Autoplaying => {
                if carousel.tick() {
                    publisher.send_replace(carousel.state());
                }
            }
            command = commands.recv() => {
                let Some(command) = command else {
                    break;
                };
                let token = match command {
                    Command::Next => carousel.next(),
                    Command::Prev => carousel.prev(),
                    Command::GoTo(index) => match carousel.go_to(index) {
                        Ok(token) => token,
                        Err(e) => {
                            log::error!("{e}");
                            continue;
                        }
                    },
                };
                pending = Some(token);
                cooldown.as_mut().reset(Instant::now() + timings.cooldown);
                publisher.send_replace(carousel.state());
            }
            _ = &mut cooldown, if pending.is_some() => {
                if let Some(token) = pending.take() {
                    if carousel.cooldown_expires(token) {
                        ticker.reset();
                        publisher.send_replace(carousel.state());
                    }
                }
            }
        }
    }

    log::trace!("> Carousel stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(active_index: usize, autoplay_enabled: bool) -> CarouselState {
        CarouselState {
            active_index,
            autoplay_enabled,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn autoplay_advances_every_tick() {
        let handle = CarouselHandle::spawn(6, CarouselTimings::default()).unwrap();
        let mut updates = handle.subscribe();
        let start = Instant::now();

        updates.changed().await.unwrap();
        assert_eq!(*updates.borrow_and_update(), state(1, true));
        assert_eq!(start.elapsed(), Duration::from_millis(4000));

        updates.changed().await.unwrap();
        assert_eq!(*updates.borrow_and_update(), state(2, true));
        assert_eq!(start.elapsed(), Duration::from_millis(8000));
    }

    #[tokio::test(start_paused = true)]
    async fn manual_navigation_pauses_then_resumes() {
        let handle = CarouselHandle::spawn(6, CarouselTimings::default()).unwrap();
        let mut updates = handle.subscribe();
        let start = Instant::now();

        handle.prev();
        updates.changed().await.unwrap();
        assert_eq!(*updates.borrow_and_update(), state(5, false));

        updates.changed().await.unwrap();
        assert_eq!(*updates.borrow_and_update(), state(5, true));
        assert_eq!(start.elapsed(), Duration::from_millis(5000));

        updates.changed().await.unwrap();
        assert_eq!(*updates.borrow_and_update(), state(0, true));
        assert_eq!(start.elapsed(), Duration::from_millis(9000));
    }

    #[tokio::test(start_paused = true)]
    async fn go_to_validates_range() {
        let handle = CarouselHandle::spawn(6, CarouselTimings::default()).unwrap();
        assert!(handle.go_to(6).is_err());
        assert!(handle.go_to(3).is_ok());

        let mut updates = handle.subscribe();
        updates.changed().await.unwrap();
        assert_eq!(*updates.borrow_and_update(), state(3, false));
    }

    #[tokio::test]
    async fn empty_carousel_does_not_start() {
        assert_eq!(
            CarouselHandle::spawn(0, CarouselTimings::default()).err(),
            Some(CarouselError::Empty)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_the_task() {
        let handle = CarouselHandle::spawn(6, CarouselTimings::default()).unwrap();
        let mut updates = handle.subscribe();
        assert!(handle.is_running());

        drop(handle);
        assert!(updates.changed().await.is_err());
    }
}
