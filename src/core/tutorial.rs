//! # Tutorial
//!
//! A short fixed list of onboarding pages. Paging never leaves the tutorial
//! screen; `next()` on the last page reports `Finished` and the caller
//! performs the outer transition.

pub struct TutorialPage {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

pub const TUTORIAL_PAGES: &[TutorialPage] = &[
    TutorialPage {
        title: "Welcome to BrainWave",
        subtitle: "Your Drone Analytics Platform",
        description: "Transform raw drone footage into actionable insights with our advanced AI-powered analytics platform.",
    },
    TutorialPage {
        title: "Real-time Monitoring",
        subtitle: "Parking Lot Analytics",
        description: "Monitor parking occupancy, predict future trends, and optimize space utilization with real-time data from your drones.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialStep {
    /// Moved to the given page.
    Advanced(usize),
    /// Already on the last page; time to leave the tutorial.
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialState {
    page: usize,
    page_count: usize,
}

impl Default for TutorialState {
    fn default() -> Self {
        Self::new(TUTORIAL_PAGES.len())
    }
}

impl TutorialState {
    pub fn new(page_count: usize) -> Self {
        Self { page: 0, page_count }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn current(&self) -> Option<&'static TutorialPage> {
        TUTORIAL_PAGES.get(self.page)
    }

    pub fn is_last_page(&self) -> bool {
        self.page + 1 >= self.page_count
    }

    pub fn can_go_back(&self) -> bool {
        self.page > 0
    }

    /// Label of the forward button.
    pub fn primary_label(&self) -> &'static str {
        if self.is_last_page() { "Get Started" } else { "Next" }
    }

    pub fn next(&mut self) -> TutorialStep {
        if self.is_last_page() {
            return TutorialStep::Finished;
        }
        self.page += 1;
        TutorialStep::Advanced(self.page)
    }

    /// Step back one page; stays put on the first page.
    pub fn back(&mut self) {
        self.page = self.page.saturating_sub(1);
    }
}
