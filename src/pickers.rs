//! Both synchronizers over one page, with the re-scan entry point hosts call.

use crate::config::SyncConfig;
use crate::decorated::DecoratedPickers;
use crate::markup::MarkupPickers;
use crate::page::Page;
use crate::registry::{on_mutations, DiscoveryTrigger, MutationBatch};

/// A page and every picker bound on it.
#[derive(Debug)]
pub struct ColorPickers<P> {
    page: P,
    decorated: DecoratedPickers,
    markup: MarkupPickers,
}

impl<P: Page> ColorPickers<P> {
    /// Wrap `page` and run the initial discovery pass.
    pub fn new(page: P, config: SyncConfig) -> Self {
        let mut pickers = Self {
            page,
            decorated: DecoratedPickers::new(config.clone()),
            markup: MarkupPickers::new(config),
        };
        let bound = pickers.initialize_color_pickers();
        log::debug!("initial color picker scan bound {bound} element(s)");
        pickers
    }

    /// Re-scan the page and bind anything new. Call after changing the page
    /// in ways no mutation watcher reports.
    pub fn initialize_color_pickers(&mut self) -> usize {
        self.rescan_now()
    }

    /// Feed mutation batches from a watcher.
    pub fn observe(&mut self, batches: &[MutationBatch]) -> usize {
        on_mutations(self, batches)
    }

    /// Drop bindings whose elements left the page.
    pub fn prune(&mut self) -> usize {
        self.decorated.prune(&self.page) + self.markup.prune(&self.page)
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn decorated(&self) -> &DecoratedPickers {
        &self.decorated
    }

    pub fn decorated_mut(&mut self) -> &mut DecoratedPickers {
        &mut self.decorated
    }

    pub fn markup(&self) -> &MarkupPickers {
        &self.markup
    }

    pub fn markup_mut(&mut self) -> &mut MarkupPickers {
        &mut self.markup
    }
}

impl<P: Page> DiscoveryTrigger for ColorPickers<P> {
    fn rescan_now(&mut self) -> usize {
        self.decorated.scan(&self.page) + self.markup.scan(&self.page)
    }
}
