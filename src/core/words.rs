/// Static word data: every category with its fixed, uppercase word list.
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Tech,
    Space,
    Nature,
    YoWords,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Tech,
        Category::Space,
        Category::Nature,
        Category::YoWords,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Tech => "ТЕХНИКА",
            Category::Space => "КОСМОС",
            Category::Nature => "ПРИРОДА",
            Category::YoWords => "С Ё-БУКВАМИ",
        }
    }

    pub fn words(self) -> &'static [&'static str] {
        match self {
            Category::Tech => &[
                "КОМПЬЮТЕР",
                "АЛГОРИТМ",
                "ИНТЕРФЕЙС",
                "ПРОГРАММИСТ",
                "СЕРВЕР",
                "БИБЛИОТЕКА",
                "ПРИЛОЖЕНИЕ",
                "ПАРАМЕТР",
                "ФУНКЦИЯ",
                "ДАННЫЕ",
                "ЛОГИКА",
                "ПИТОН",
                "НЕЙРОСЕТЬ",
            ],
            Category::Space => &[
                "РАКЕТА",
                "КОСМОС",
                "ЗВЕЗДА",
                "ГРАВИТАЦИЯ",
                "ПУЛЬСАР",
                "КВАНТ",
                "СИНТЕЗ",
                "ВИХРЬ",
            ],
            Category::Nature => &[
                "СНЕЖИНКА",
                "ОКЕАН",
                "МОЛЕКУЛА",
                "ЖИРАФ",
                "КАРТИНА",
                "РЕАЛЬНОСТЬ",
                "ТЕТРАДЬ",
                "ЭНЕРГИЯ",
            ],
            Category::YoWords => &["ЁЛКА", "ЁМКОСТЬ", "ШЁПОТ"],
        }
    }

    /// Next category for the cyclic "change category" button.
    pub fn next(self) -> Category {
        let i = Category::ALL
            .iter()
            .position(|&c| c == self)
            .unwrap_or_default();
        Category::ALL[(i + 1) % Category::ALL.len()]
    }

    /// One word drawn uniformly at random from this category's list.
    pub fn pick_word(self) -> &'static str {
        let words = self.words();
        let mut rng = rand::rng();
        words[rng.random_range(0..words.len())]
    }
}
