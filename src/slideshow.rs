use super::*;

pub(crate) struct Slideshow {
  current: usize,
  image_count: usize,
  interval: Duration,
  last_advance: Instant,
  running: bool,
}

impl Slideshow {
  pub(crate) const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);
  pub(crate) const IMAGE_COUNT: usize = 16;
  pub(crate) const IMAGE_DIR: &'static str = "/images/life/";
  pub(crate) const MAX_INTERVAL: Duration = Duration::from_secs(30);
  pub(crate) const MIN_INTERVAL: Duration = Duration::from_secs(1);

  fn advance(&mut self, now: Instant) {
    self.current = self.current % self.image_count + 1;
    self.last_advance = now;
  }

  pub(crate) fn current(&self) -> usize {
    self.current
  }

  pub(crate) fn current_image(&self) -> String {
    format!("{}{}.jpg", Self::IMAGE_DIR, self.current)
  }

  pub(crate) fn image_count(&self) -> usize {
    self.image_count
  }

  pub(crate) fn interval(&self) -> Duration {
    self.interval
  }

  pub(crate) fn is_running(&self) -> bool {
    self.running
  }

  pub(crate) fn new(image_count: usize) -> Self {
    Self {
      current: 1,
      image_count: image_count.max(1),
      interval: Self::DEFAULT_INTERVAL,
      last_advance: Instant::now(),
      running: true,
    }
  }

  pub(crate) fn next(&mut self) {
    self.advance(Instant::now());
  }

  pub(crate) fn prev(&mut self) {
    self.current = if self.current <= 1 {
      self.image_count
    } else {
      self.current - 1
    };

    self.last_advance = Instant::now();
  }

  pub(crate) fn set_speed(&mut self, interval: Duration) {
    self.interval = interval.clamp(Self::MIN_INTERVAL, Self::MAX_INTERVAL);
    self.last_advance = Instant::now();
  }

  pub(crate) fn start(&mut self) {
    if !self.running {
      self.running = true;
      self.last_advance = Instant::now();
    }
  }

  pub(crate) fn stop(&mut self) {
    self.running = false;
  }

  pub(crate) fn tick(&mut self, now: Instant) -> bool {
    if !self.running {
      return false;
    }

    if now.duration_since(self.last_advance) < self.interval {
      return false;
    }

    self.advance(now);

    true
  }

  pub(crate) fn toggle_running(&mut self) {
    if self.running {
      self.stop();
    } else {
      self.start();
    }
  }
}
