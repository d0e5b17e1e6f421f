use std::fmt;

/// Question difficulty offered on the setup screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Value of the `difficulty` query parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An OpenTDB category and its numeric id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Category {
    pub label: &'static str,
    pub id: u32,
}

impl Category {
    const fn new(label: &'static str, id: u32) -> Self {
        Self { label, id }
    }

    pub fn all() -> &'static [Category] {
        &CATEGORIES
    }

    pub fn by_label(label: &str) -> Option<Self> {
        CATEGORIES.iter().copied().find(|c| c.label == label)
    }

    pub fn by_id(id: u32) -> Option<Self> {
        CATEGORIES.iter().copied().find(|c| c.id == id)
    }
}

impl Default for Category {
    fn default() -> Self {
        CATEGORIES[0]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

// Display order on the setup screen
const CATEGORIES: [Category; 24] = [
    Category::new("General Knowledge", 9),
    Category::new("Books", 10),
    Category::new("Film", 11),
    Category::new("Music", 12),
    Category::new("Musicals and Theatre", 13),
    Category::new("Television", 14),
    Category::new("Video Games", 15),
    Category::new("Board Games", 16),
    Category::new("Science & Nature", 17),
    Category::new("Computers", 18),
    Category::new("Mathematics", 19),
    Category::new("Mythology", 20),
    Category::new("Sports", 21),
    Category::new("Geography", 22),
    Category::new("History", 23),
    Category::new("Politics", 24),
    Category::new("Art", 25),
    Category::new("Celebrities", 26),
    Category::new("Animals", 27),
    Category::new("Vehicles", 28),
    Category::new("Comics", 29),
    Category::new("Gadgets", 30),
    Category::new("Anime & Manga", 31),
    Category::new("Cartoon & Animation", 32),
];

/// What the user picked on the setup screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizSelection {
    pub difficulty: Difficulty,
    pub category: Category,
}

impl QuizSelection {
    pub fn new(difficulty: Difficulty, category: Category) -> Self {
        Self {
            difficulty,
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let selection = QuizSelection::default();
        assert_eq!(selection.difficulty, Difficulty::Medium);
        assert_eq!(selection.category.label, "General Knowledge");
        assert_eq!(selection.category.id, 9);
    }

    #[test]
    fn test_category_table_is_contiguous() {
        let all = Category::all();
        assert_eq!(all.len(), 24);
        for (i, category) in all.iter().enumerate() {
            assert_eq!(category.id, 9 + i as u32);
        }
        assert_eq!(all.last().map(|c| c.label), Some("Cartoon & Animation"));
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(Category::by_label("Mythology").map(|c| c.id), Some(20));
        assert_eq!(Category::by_id(31).map(|c| c.label), Some("Anime & Manga"));
        assert_eq!(Category::by_label("Cooking"), None);
        assert_eq!(Category::by_id(8), None);
    }

    #[test]
    fn test_difficulty_param_is_lowercase_label() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.as_param(), difficulty.label().to_lowercase());
        }
    }
}
