/// Built-in preset lists, for starting a run without typing options.
pub struct Preset {
    /// Key used on the command line.
    pub key: &'static str,
    /// Human-readable title, shown above the run.
    pub title: &'static str,
    pub names: &'static [&'static str],
}

pub const PRESETS: &[Preset] = &[
    Preset {
        key: "restaurants",
        title: "Restaurant Types",
        names: &[
            "Pizza Palace",
            "Sushi World",
            "Burger Town",
            "Taco Fiesta",
            "Indian Delight",
            "Ramen House",
            "BBQ Shack",
        ],
    },
    Preset {
        key: "baby-names-boys",
        title: "Baby Names (Boys)",
        names: &[
            "Liam", "Noah", "Oliver", "Elijah", "James", "William", "Benjamin", "Lucas",
            "Henry", "Theodore", "Jack", "Levi", "Alexander", "Jackson", "Mateo", "Daniel",
            "Michael", "Mason", "Sebastian", "Ethan", "Logan", "Owen", "Samuel", "Jacob",
            "Asher", "Aiden", "John", "Joseph", "Wyatt", "David", "Leo", "Luke", "Julian",
            "Hudson", "Grayson", "Matthew", "Ezra", "Gabriel", "Carter", "Isaac", "Jayden",
            "Luca", "Anthony", "Dylan", "Lincoln", "Thomas", "Maverick", "Elias", "Josiah",
            "Charles", "Caleb", "Christopher", "Ezekiel", "Miles", "Jaxon", "Isaiah",
            "Andrew", "Joshua", "Nathan", "Nolan", "Adrian", "Cameron", "Santiago", "Eli",
            "Aaron", "Ryan", "Angel", "Cooper", "Waylon", "Easton", "Kai", "Christian",
            "Landon", "Colton", "Roman", "Axel", "Brooks", "Jonathan", "Robert", "Jameson",
            "Ian", "Everett", "Greyson", "Wesley", "Jeremiah", "Hunter", "Leonardo",
            "Jordan", "Jose", "Bennett", "Silas", "Nicholas", "Parker", "Beau", "Weston",
            "Austin", "Connor", "Carson", "Dominic", "Xavier",
        ],
    },
    Preset {
        key: "baby-names-girls",
        title: "Baby Names (Girls)",
        names: &[
            "Elizabeth", "Emma", "Amelia", "Charlotte", "Mia", "Sophia", "Isabella",
            "Evelyn", "Ava", "Sofia", "Camila", "Harper", "Luna", "Eleanor", "Violet",
            "Aurora", "Olivia", "Eliana", "Hazel", "Chloe", "Ellie", "Nora", "Gianna",
            "Lily", "Emily", "Aria", "Scarlett", "Penelope", "Zoe", "Ella", "Sarah",
            "Quinn", "Lydia", "Lucia", "Allison", "Hailey", "Layla", "Riley", "Victoria",
            "Madison", "Grace", "Addison", "Paisley", "Aubrey", "Zoey", "Natalie",
            "Savannah", "Brooklyn", "Claire", "Ivy", "Anna", "Skylar", "Bella", "Leah",
            "Lucy", "Stella", "Natalia", "Maya", "Willow", "Naomi", "Everly", "Hannah",
            "Lillian", "Elena", "Aaliyah", "Kennedy", "Kinsley", "Ruby", "Sophie",
            "Serenity", "Genesis", "Ariana", "Autumn", "Piper", "Sadie", "Alice",
            "Raelynn", "Gabriella", "Allie", "Alaia", "Melody", "Nevaeh", "Aubree",
            "Madelyn", "Rylee", "Athena", "Maria", "Liliana", "Hadley", "Jade",
            "Brooklynn", "Clara", "Reagan", "Trinity", "Brielle", "Remi", "Juniper",
            "Faith", "Isla", "Adeline",
        ],
    },
];

/// Look up a preset by its command-line key.
pub fn find(key: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_key() {
        assert_eq!(find("restaurants").unwrap().names.len(), 7);
        assert!(find("no-such-preset").is_none());
    }

    #[test]
    fn presets_are_rankable() {
        // Every preset must survive the engine's normalization with at
        // least 2 distinct names.
        for preset in PRESETS {
            let names = duelrank_core::normalize_names(preset.names);
            assert!(names.len() >= 2, "preset {} too small", preset.key);
            assert_eq!(names.len(), preset.names.len(), "preset {} has duplicates", preset.key);
        }
    }
}
