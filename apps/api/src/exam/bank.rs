//! Authored general-knowledge pool and its translations.

pub struct GkItem {
    pub id: &'static str,
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub answer: usize,
}

pub struct GkTranslation {
    pub id: &'static str,
    pub language: &'static str,
    pub question: &'static str,
    pub options: [&'static str; 4],
}

const fn gk(
    id: &'static str,
    question: &'static str,
    options: [&'static str; 4],
    answer: usize,
) -> GkItem {
    GkItem { id, question, options, answer }
}

const fn tr(
    id: &'static str,
    language: &'static str,
    question: &'static str,
    options: [&'static str; 4],
) -> GkTranslation {
    GkTranslation { id, language, question, options }
}

pub static GK_POOL: [GkItem; 20] = [
    gk("gk1", "Who was the first Prime Minister of India?", ["Gandhi", "Nehru", "Patel", "Bose"], 1),
    gk("gk2", "What is the capital of India?", ["Mumbai", "Kolkata", "New Delhi", "Chennai"], 2),
    gk("gk3", "Which is the largest planet?", ["Mars", "Jupiter", "Saturn", "Earth"], 1),
    gk("gk4", "Who wrote the National Anthem?", ["Tagore", "Bankim", "Sarojini", "Premchand"], 0),
    gk("gk5", "Which year did India get independence?", ["1942", "1945", "1947", "1950"], 2),
    gk("gk6", "What is the national animal of India?", ["Lion", "Tiger", "Elephant", "Horse"], 1),
    gk("gk7", "Which organ purifies blood?", ["Heart", "Lungs", "Kidney", "Liver"], 2),
    gk("gk8", "Chemical formula of Water?", ["HO2", "H2O", "O2H", "H2O2"], 1),
    gk("gk9", "Powerhouse of the cell?", ["Nucleus", "Mitochondria", "Ribosome", "DNA"], 1),
    gk("gk10", "Which state is known as 'God's Own Country'?", ["Kerala", "Goa", "Assam", "Kashmir"], 0),
    gk("gk11", "Smallest state in India?", ["Sikkim", "Goa", "Tripura", "Manipur"], 1),
    gk("gk12", "Who built the Taj Mahal?", ["Akbar", "Shah Jahan", "Jahangir", "Babur"], 1),
    gk("gk13", "Minimum age for President?", ["25", "30", "35", "40"], 2),
    gk("gk14", "Who appoints the Governor?", ["PM", "President", "CM", "Chief Justice"], 1),
    gk("gk15", "Currency of Japan?", ["Yen", "Dollar", "Euro", "Rupee"], 0),
    gk("gk16", "Hardest substance on Earth?", ["Gold", "Iron", "Diamond", "Platinum"], 2),
    gk("gk17", "Study of birds is called?", ["Ornithology", "Zoology", "Botany", "Virology"], 0),
    gk("gk18", "Longest river in India?", ["Ganga", "Yamuna", "Godavari", "Narmada"], 0),
    gk("gk19", "Which gas is essential for burning?", ["Nitrogen", "Oxygen", "Carbon", "Helium"], 1),
    gk("gk20", "Capital of West Bengal?", ["Kolkata", "Howrah", "Darjeeling", "Siliguri"], 0),
];

pub static GK_TRANSLATIONS: [GkTranslation; 6] = [
    tr("gk1", "hi", "भारत के पहले प्रधान मंत्री कौन थे?", ["गांधी", "नेहरू", "पटेल", "बोस"]),
    tr("gk1", "bn", "ভারতের প্রথম প্রধানমন্ত্রী কে ছিলেন?", ["গান্ধী", "নেহেরু", "প্যাটেল", "বসু"]),
    tr("gk2", "hi", "भारत की राजधानी क्या है?", ["मुंबई", "कोलकाता", "नई दिल्ली", "चेन्नई"]),
    tr("gk2", "bn", "ভারতের রাজধানী কোনটি?", ["মুম্বাই", "কলকাতা", "নয়াদিল্লি", "চেন্নাই"]),
    tr("gk3", "hi", "सबसे बड़ा ग्रह कौन सा है?", ["मंगल", "बृहस्पति", "शनि", "पृथ्वी"]),
    tr("gk3", "bn", "সবচেয়ে বড় গ্রহ কোনটি?", ["মঙ্গল", "বৃহস্পতি", "শনি", "পৃথিবী"]),
];

/// Translation of `id` into `language`, if one was authored.
pub fn translation(id: &str, language: &str) -> Option<&'static GkTranslation> {
    GK_TRANSLATIONS
        .iter()
        .find(|t| t.id == id && t.language == language)
}
