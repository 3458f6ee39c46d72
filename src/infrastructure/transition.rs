//! Task-based scene director
//!
//! Turns a transition request into an unawaited tokio task driving the
//! asynchronous scene loader. The controller fires the request and yields
//! straight back to the host; it never observes completion. A second request
//! aborts the in-flight load: last request wins.

use std::sync::{Arc, Mutex};

use log::{debug, warn};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::ports::{SceneDirector, SceneLoader};
use crate::types::SceneIndex;

pub struct TaskSceneDirector {
    loader: Arc<dyn SceneLoader>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl TaskSceneDirector {
    pub fn new(loader: Arc<dyn SceneLoader>) -> Self {
        Self {
            loader,
            in_flight: Mutex::new(None),
        }
    }
}

impl SceneDirector for TaskSceneDirector {
    fn request_transition(&self, scene: SceneIndex) {
        let Ok(runtime) = Handle::try_current() else {
            warn!("no async runtime available, dropping transition to scene {scene}");
            return;
        };

        debug!("requesting transition to scene {scene}");
        let loader = Arc::clone(&self.loader);
        let handle = runtime.spawn(async move {
            if let Err(err) = loader.load(scene).await {
                warn!("{err}");
            }
        });

        let mut slot = self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(previous) = slot.replace(handle) {
            // Last request wins.
            previous.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::error::UiError;

    struct SlowLoader {
        delay: Duration,
        loaded: Mutex<Vec<SceneIndex>>,
    }

    impl SlowLoader {
        fn new(delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                delay,
                loaded: Mutex::new(Vec::new()),
            })
        }

        fn loaded(&self) -> Vec<SceneIndex> {
            self.loaded
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .clone()
        }
    }

    #[async_trait]
    impl SceneLoader for SlowLoader {
        async fn load(&self, scene: SceneIndex) -> Result<(), UiError> {
            tokio::time::sleep(self.delay).await;
            self.loaded
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push(scene);
            Ok(())
        }
    }

    #[tokio::test]
    async fn request_completes_out_of_band() {
        let loader = SlowLoader::new(Duration::from_millis(5));
        let director = TaskSceneDirector::new(loader.clone());

        director.request_transition(SceneIndex(1));
        assert!(loader.loaded().is_empty());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(loader.loaded(), vec![SceneIndex(1)]);
    }

    #[tokio::test]
    async fn second_request_cancels_the_first() {
        let loader = SlowLoader::new(Duration::from_millis(20));
        let director = TaskSceneDirector::new(loader.clone());

        director.request_transition(SceneIndex(1));
        director.request_transition(SceneIndex(2));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(loader.loaded(), vec![SceneIndex(2)]);
    }
}
