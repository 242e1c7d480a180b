//! Terminal stand-in for the voice runtime: prompts and speech go to stdout,
//! replies are read line by line.

use async_trait::async_trait;
use cp_capability::ConversationHost;
use cp_core::{Error, Result};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;
use tracing::debug;

pub struct ConsoleHost {
  input: Mutex<Box<dyn AsyncBufRead + Send + Unpin>>,
  output: std::sync::Mutex<Box<dyn Write + Send>>,
}

impl ConsoleHost {
  pub fn stdio() -> Self {
    Self::new(BufReader::new(tokio::io::stdin()), std::io::stdout())
  }

  pub fn new<R, W>(input: R, output: W) -> Self
  where
    R: AsyncBufRead + Send + Unpin + 'static,
    W: Write + Send + 'static,
  {
    Self { input: Mutex::new(Box::new(input)), output: std::sync::Mutex::new(Box::new(output)) }
  }

  /// Next line of input; `None` once input is closed.
  pub async fn next_utterance(&self) -> Result<Option<String>> {
    self.write_line("> ", false)?;
    let mut line = String::new();
    let read = self.input.lock().await.read_line(&mut line).await?;
    if read == 0 {
      return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
  }

  /// Print a line, ignoring output errors.
  pub fn say(&self, text: &str) {
    if let Err(e) = self.write_line(text, true) {
      debug!("Failed to write to console: {}", e);
    }
  }

  fn write_line(&self, text: &str, newline: bool) -> Result<()> {
    let mut output =
      self.output.lock().map_err(|_| Error::Host("console output poisoned".to_string()))?;
    if newline {
      writeln!(output, "{}", text)?;
    } else {
      write!(output, "{}", text)?;
    }
    output.flush()?;
    Ok(())
  }
}

#[async_trait]
impl ConversationHost for ConsoleHost {
  async fn prompt_and_wait(&self, prompt: &str) -> Result<Option<String>> {
    self.write_line(prompt, true)?;
    match self.next_utterance().await? {
      Some(answer) if answer.trim().is_empty() => Ok(None),
      Some(answer) => Ok(Some(answer)),
      None => Err(Error::Host("input closed".to_string())),
    }
  }

  async fn speak(&self, text: &str) -> Result<()> {
    self.write_line(text, true)
  }

  fn resume_normal_flow(&self) {
    debug!("Returning control to the console");
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::{Arc, Mutex as StdMutex};

  #[derive(Clone, Default)]
  struct SharedBuffer(Arc<StdMutex<Vec<u8>>>);

  impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
      self.0.lock().unwrap().extend_from_slice(buf);
      Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
      Ok(())
    }
  }

  impl SharedBuffer {
    fn contents(&self) -> String {
      String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
  }

  #[tokio::test]
  async fn test_prompt_reads_answers() {
    let output = SharedBuffer::default();
    let host = ConsoleHost::new(&b"Bitcoin\r\n\n"[..], output.clone());

    assert_eq!(host.prompt_and_wait("Which coin?").await.unwrap(), Some("Bitcoin".to_string()));
    assert_eq!(host.prompt_and_wait("Again?").await.unwrap(), None);
    assert!(matches!(host.prompt_and_wait("Still there?").await, Err(Error::Host(_))));

    let printed = output.contents();
    assert!(printed.starts_with("Which coin?\n> "));
    assert!(printed.contains("Again?"));
  }

  #[tokio::test]
  async fn test_speak_and_utterances() {
    let output = SharedBuffer::default();
    let host = ConsoleHost::new(&b"what's the crypto price\n"[..], output.clone());

    host.speak("Hello.").await.unwrap();
    assert_eq!(host.next_utterance().await.unwrap(), Some("what's the crypto price".to_string()));
    assert_eq!(host.next_utterance().await.unwrap(), None);
    assert!(output.contents().starts_with("Hello.\n"));
  }
}
