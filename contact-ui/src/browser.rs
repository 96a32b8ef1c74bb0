//! Browser process lifecycle.
//!
//! Launches headless Chrome through chromiumoxide, drives the DevTools
//! event handler on a background task and hands out page handles.

use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::error::{UiError, UiResult};
use crate::pages::PageHandle;
use crate::wait::WaitConfig;

/// Browser launch configuration.
#[derive(Debug, Clone)]
pub struct TestBrowserConfig {
    /// Run without a visible window (default: true)
    pub headless: bool,
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
    /// Waiting strategy handed to every page
    pub wait: WaitConfig,
}

impl Default for TestBrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1280,
            window_height: 900,
            wait: WaitConfig::default(),
        }
    }
}

impl TestBrowserConfig {
    /// Run with a visible window, for local debugging.
    #[must_use]
    pub const fn with_head(mut self) -> Self {
        self.headless = false;
        self
    }

    /// Set the window size.
    #[must_use]
    pub const fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Set the waiting strategy for pages.
    #[must_use]
    pub const fn with_wait(mut self, wait: WaitConfig) -> Self {
        self.wait = wait;
        self
    }
}

/// A running browser instance owned by one test.
///
/// The DevTools event stream is drained on a background task for the
/// lifetime of the instance; [`TestBrowser::close`] shuts both down.
pub struct TestBrowser {
    browser: Browser,
    handler_task: JoinHandle<()>,
    wait: WaitConfig,
}

impl TestBrowser {
    /// Launch a browser with the given configuration.
    ///
    /// # Errors
    ///
    /// Fails when Chrome cannot be found or started.
    pub async fn launch(config: &TestBrowserConfig) -> UiResult<Self> {
        info!(headless = config.headless, "launching browser");

        let mut builder =
            BrowserConfig::builder().window_size(config.window_width, config.window_height);
        if !config.headless {
            builder = builder.with_head();
        }
        let browser_config = builder.build().map_err(UiError::Browser)?;

        let (browser, mut handler) = Browser::launch(browser_config).await?;
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            browser,
            handler_task,
            wait: config.wait.clone(),
        })
    }

    /// Open a fresh page (tab).
    ///
    /// # Errors
    ///
    /// Fails when the page cannot be created.
    pub async fn new_page(&self) -> UiResult<PageHandle> {
        let page = self.browser.new_page("about:blank").await?;
        Ok(PageHandle::new(page, self.wait.clone()))
    }

    /// Close the browser and stop the event handler.
    ///
    /// # Errors
    ///
    /// Fails when the browser refuses to shut down cleanly.
    pub async fn close(mut self) -> UiResult<()> {
        debug!("closing browser");
        self.browser.close().await?;
        self.handler_task.abort();
        Ok(())
    }
}
