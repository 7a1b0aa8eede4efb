/// One entry of the numbered main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Total,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::Add),
            2 => Some(Self::List),
            3 => Some(Self::Total),
            4 => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn number(&self) -> i64 {
        match self {
            Self::Add => 1,
            Self::List => 2,
            Self::Total => 3,
            Self::Exit => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add New Transaction",
            Self::List => "View All Transactions",
            Self::Total => "View Total Spending",
            Self::Exit => "Exit",
        }
    }

    pub fn all() -> &'static [MenuChoice] {
        &[Self::Add, Self::List, Self::Total, Self::Exit]
    }
}

impl std::fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}
