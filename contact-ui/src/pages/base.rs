//! Shared page plumbing.

use chromiumoxide::Page;
use tracing::debug;

use crate::error::{UiError, UiResult};
use crate::wait::{WaitConfig, poll_until};

/// Handle to one browser tab, with the interaction primitives every page
/// object builds on.
///
/// Clones share the tab, so several page objects can drive one navigation
/// flow.
#[derive(Clone)]
pub struct PageHandle {
    page: Page,
    wait: WaitConfig,
}

impl PageHandle {
    /// Wrap a chromiumoxide page with a waiting strategy.
    #[must_use]
    pub const fn new(page: Page, wait: WaitConfig) -> Self {
        Self { page, wait }
    }

    /// The waiting strategy used by this handle.
    #[must_use]
    pub const fn wait_config(&self) -> &WaitConfig {
        &self.wait
    }

    /// The underlying chromiumoxide page.
    #[must_use]
    pub const fn inner(&self) -> &Page {
        &self.page
    }

    /// Navigate to a URL and wait for the load to finish.
    ///
    /// # Errors
    ///
    /// Fails when navigation fails.
    pub async fn open(&self, url: &str) -> UiResult<()> {
        debug!(url, "open page");
        self.page.goto(url).await?;
        self.page.wait_for_navigation().await?;
        Ok(())
    }

    /// The URL the browser currently shows.
    ///
    /// # Errors
    ///
    /// Fails when the browser reports no URL.
    pub async fn current_url(&self) -> UiResult<String> {
        self.page
            .url()
            .await?
            .ok_or_else(|| UiError::Browser("page reports no URL".to_string()))
    }

    /// Assert the current URL equals `expected`.
    ///
    /// # Errors
    ///
    /// Fails with [`UiError::UrlMismatch`] otherwise.
    pub async fn assert_url(&self, expected: &str) -> UiResult<()> {
        let actual = self.current_url().await?;
        if actual == expected {
            Ok(())
        } else {
            Err(UiError::url_mismatch(expected, actual))
        }
    }

    /// Check if an element is present on the page.
    pub async fn is_element_present(&self, selector: &str) -> bool {
        self.page.find_element(selector).await.is_ok()
    }

    /// Require an element to be present.
    ///
    /// # Errors
    ///
    /// Fails with [`UiError::ElementNotFound`] when it is not.
    pub async fn require_element(&self, selector: &str) -> UiResult<()> {
        if self.is_element_present(selector).await {
            Ok(())
        } else {
            Err(UiError::element_not_found(selector))
        }
    }

    /// Click an element.
    ///
    /// # Errors
    ///
    /// Fails when the element is missing or the click cannot be delivered.
    pub async fn click(&self, selector: &str) -> UiResult<()> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| UiError::element_not_found(selector))?;
        element.click().await?;
        Ok(())
    }

    /// Focus a field and type text into it.
    ///
    /// # Errors
    ///
    /// Fails when the field is missing or typing fails.
    pub async fn fill(&self, selector: &str, text: &str) -> UiResult<()> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| UiError::element_not_found(selector))?;
        element.click().await?;
        element.type_str(text).await?;
        Ok(())
    }

    /// Blank an input field's value.
    ///
    /// # Errors
    ///
    /// Fails when the script cannot run.
    pub async fn clear(&self, selector: &str) -> UiResult<()> {
        self.page
            .evaluate(format!("document.querySelector('{selector}').value = ''"))
            .await?;
        Ok(())
    }

    /// Read an input field's current value.
    ///
    /// # Errors
    ///
    /// Fails when the script cannot run or yields no string.
    pub async fn input_value(&self, selector: &str) -> UiResult<String> {
        let result = self
            .page
            .evaluate(format!("document.querySelector('{selector}').value"))
            .await?;
        result
            .into_value()
            .map_err(|err| UiError::Browser(err.to_string()))
    }

    /// Read the rendered text of an element, waiting for it to appear.
    ///
    /// # Errors
    ///
    /// Fails when the element never appears.
    pub async fn visible_text(&self, selector: &str) -> UiResult<String> {
        self.wait_for_element(selector).await?;
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| UiError::element_not_found(selector))?;
        Ok(element.inner_text().await?.unwrap_or_default())
    }

    /// Rendered text of every element matched by the selector.
    ///
    /// # Errors
    ///
    /// Fails when a matched element's text cannot be read.
    pub async fn find_all_text(&self, selector: &str) -> UiResult<Vec<String>> {
        let elements = self.page.find_elements(selector).await.unwrap_or_default();
        let mut texts = Vec::with_capacity(elements.len());
        for element in &elements {
            texts.push(element.inner_text().await?.unwrap_or_default());
        }
        Ok(texts)
    }

    /// Wait until an element is present.
    ///
    /// # Errors
    ///
    /// Fails with [`UiError::WaitTimeout`] when it never appears.
    pub async fn wait_for_element(&self, selector: &str) -> UiResult<()> {
        poll_until(&self.wait, selector, || self.is_element_present(selector)).await
    }

    /// Wait until the current URL equals `expected`.
    ///
    /// # Errors
    ///
    /// Fails with [`UiError::WaitTimeout`] when it never does.
    pub async fn wait_for_url(&self, expected: &str) -> UiResult<()> {
        poll_until(&self.wait, expected, || async move {
            self.current_url()
                .await
                .is_ok_and(|url| url == expected)
        })
        .await
    }

    /// Wait until an input field's value is empty.
    ///
    /// # Errors
    ///
    /// Fails with [`UiError::WaitTimeout`] when it never empties.
    pub async fn wait_for_input_cleared(&self, selector: &str) -> UiResult<()> {
        poll_until(&self.wait, selector, || async move {
            self.input_value(selector)
                .await
                .is_ok_and(|value| value.is_empty())
        })
        .await
    }

    /// Pre-accept the next `window.confirm` dialog on this page.
    ///
    /// The DevTools protocol has no blocking alert handle, so the dialog is
    /// answered before it opens.
    ///
    /// # Errors
    ///
    /// Fails when the script cannot run.
    pub async fn accept_next_dialog(&self) -> UiResult<()> {
        self.page.evaluate("window.confirm = () => true").await?;
        Ok(())
    }
}
