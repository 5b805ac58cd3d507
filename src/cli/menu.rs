use strsim::levenshtein;

use super::output;

/// One selectable entry of the main menu.
#[derive(Clone)]
pub struct MenuEntry {
    pub choice: &'static str,
    pub alias: &'static str,
    pub description: &'static str,
    pub action: MenuAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddIncome,
    AddExpense,
    Summary,
    ListAll,
    DeleteLast,
    Exit,
}

/// The six-entry main menu rendered at the top of every loop turn.
pub struct MainMenu {
    entries: Vec<MenuEntry>,
}

impl MainMenu {
    pub fn new() -> Self {
        let entries = vec![
            MenuEntry {
                choice: "1",
                alias: "income",
                description: "Add income",
                action: MenuAction::AddIncome,
            },
            MenuEntry {
                choice: "2",
                alias: "expense",
                description: "Add expense",
                action: MenuAction::AddExpense,
            },
            MenuEntry {
                choice: "3",
                alias: "summary",
                description: "Monthly summary",
                action: MenuAction::Summary,
            },
            MenuEntry {
                choice: "4",
                alias: "list",
                description: "List all transactions",
                action: MenuAction::ListAll,
            },
            MenuEntry {
                choice: "5",
                alias: "delete",
                description: "Delete last transaction",
                action: MenuAction::DeleteLast,
            },
            MenuEntry {
                choice: "6",
                alias: "exit",
                description: "Exit",
                action: MenuAction::Exit,
            },
        ];
        Self { entries }
    }

    /// Prints the menu in selection order.
    pub fn render(&self) {
        output::section("Menu");
        for entry in &self.entries {
            output::plain(format!("{}) {}", entry.choice, entry.description));
        }
    }

    /// Resolves a token to an action: the entry digit or its named alias.
    pub fn resolve(&self, token: &str) -> Option<MenuAction> {
        let needle = token.trim().to_ascii_lowercase();
        if needle == "quit" {
            return Some(MenuAction::Exit);
        }
        self.entries
            .iter()
            .find(|entry| entry.choice == needle || entry.alias == needle)
            .map(|entry| entry.action)
    }

    /// Closest alias by edit distance, for unknown-choice hints.
    pub fn suggest(&self, token: &str) -> Option<&'static str> {
        let needle = token.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .map(|entry| (levenshtein(&needle, entry.alias), entry.alias))
            .filter(|(distance, _)| *distance <= 2)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, alias)| alias)
    }
}
