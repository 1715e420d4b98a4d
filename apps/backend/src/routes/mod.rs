pub mod quran;
