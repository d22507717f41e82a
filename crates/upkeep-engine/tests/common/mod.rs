use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use upkeep_core::{ExError, ExErrorKind, WriteIntent};
use upkeep_engine::{RemoteReader, RemoteWriter};

/// One scripted response of the fake remote
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Step {
    Respond(Value),
    Fail(ExErrorKind),
    /// Never answers
    Hang,
}

/// Fake remote replaying a script of reads; the last step repeats forever.
pub struct ScriptedRemote {
    reads: Mutex<VecDeque<Step>>,
    last: Mutex<Step>,
    echo: Mutex<Option<Result<Value, ExErrorKind>>>,
    read_calls: AtomicU32,
    write_calls: AtomicU32,
}

#[allow(dead_code)]
impl ScriptedRemote {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            reads: Mutex::new(steps.into_iter().collect()),
            last: Mutex::new(Step::Hang),
            echo: Mutex::new(None),
            read_calls: AtomicU32::new(0),
            write_calls: AtomicU32::new(0),
        }
    }

    pub fn with_echo(self, echo: Value) -> Self {
        *self.echo.lock().unwrap() = Some(Ok(echo));
        self
    }

    pub fn with_write_failure(self, kind: ExErrorKind) -> Self {
        *self.echo.lock().unwrap() = Some(Err(kind));
        self
    }

    pub fn read_calls(&self) -> u32 {
        self.read_calls.load(Ordering::SeqCst)
    }

    pub fn write_calls(&self) -> u32 {
        self.write_calls.load(Ordering::SeqCst)
    }

    fn next_step(&self) -> Step {
        let mut reads = self.reads.lock().unwrap();
        let mut last = self.last.lock().unwrap();
        if let Some(step) = reads.pop_front() {
            *last = step;
        }
        last.clone()
    }
}

#[async_trait]
impl RemoteReader for ScriptedRemote {
    async fn read(&self, target_id: &str) -> Result<Value, ExError> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        match self.next_step() {
            Step::Respond(value) => Ok(value),
            Step::Fail(kind) => Err(ExError::new(kind)
                .with_target_id(target_id)
                .with_message("scripted read failure")),
            Step::Hang => std::future::pending().await,
        }
    }
}

#[async_trait]
impl RemoteWriter for ScriptedRemote {
    async fn write(&self, _intent: &WriteIntent) -> Result<Value, ExError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        let echo = self.echo.lock().unwrap().clone();
        match echo {
            Some(Ok(value)) => Ok(value),
            Some(Err(kind)) => Err(ExError::new(kind).with_message("scripted write failure")),
            None => Ok(Value::Null),
        }
    }
}
