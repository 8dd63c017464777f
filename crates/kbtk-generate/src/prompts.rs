//! Prompt templates, one per content type.

use std::collections::HashMap;

use kbtk_tags::{ContentType, InputTag};

/// Extracted input text keyed by the tag it came from.
pub type ExtractedInputs = HashMap<InputTag, String>;

const MARKUP_GUIDE: &str = "\
PETUNJUK PENTING FORMAT PENULISAN:
1. Gunakan tanda '# ' untuk judul utama (Heading 5).
2. Gunakan tanda '## ' untuk sub-judul (Bold text).
3. Gunakan tanda '• ' untuk tingkat pertama dalam daftar (Bullet list, nesting level 0).
4. Gunakan tanda '* ' untuk tingkat kedua dalam daftar (Bullet list, nesting level 1).
5. Gunakan huruf 'a., b., c.' untuk tingkat kedua dalam daftar (Bullet list, nesting level 1).
6. Gunakan huruf 'i., ii., iii.' untuk tingkat ketiga dalam daftar (Bullet list, nesting level 2).
7. Gunakan tanda '-' untuk bullet point biasa pada tingkat yang sedang berjalan.
8. Biarkan baris kosong untuk membuat paragraf baru.";

fn input<'a>(inputs: &'a ExtractedInputs, tag: InputTag) -> &'a str {
    inputs.get(&tag).map(String::as_str).unwrap_or_default()
}

/// Build the prompt for `content_type` from its extracted inputs. Missing
/// inputs are rendered as empty text.
pub fn build_prompt(content_type: ContentType, inputs: &ExtractedInputs) -> String {
    match content_type {
        ContentType::Rpph => rpph_prompt(input(inputs, InputTag::Rpph)),
        ContentType::ActivityDetail => activity_detail_prompt(input(inputs, InputTag::ActivityDetail)),
        ContentType::AssessmentGuide => assessment_guide_prompt(input(inputs, InputTag::Assessment)),
        ContentType::Story => story_prompt(input(inputs, InputTag::StoryTopic)),
    }
}

fn rpph_prompt(info: &str) -> String {
    format!(
        "Buatkan RPPH PAUD Kurikulum Merdeka berdasarkan informasi berikut:

INFO DASAR:
{info}

Harap buatkan RPPH lengkap dengan format berikut:
1. Identitas (Semester/Bulan/Hari/Tanggal/Kelompok/Tema/Subtema/Alokasi Waktu)
2. Tujuan Pembelajaran
3. Materi Pembelajaran
4. Alat dan Bahan
5. Kegiatan Pembelajaran (Pembukaan, Inti, Istirahat, Penutup)
6. Penilaian (Teknik dan Indikator per aspek perkembangan)
7. Catatan dan Refleksi
8. Tanda tangan (Kepala TK dan Guru Kelas)

Berikan dalam format yang terstruktur dan detail.
"
    )
}

fn activity_detail_prompt(info: &str) -> String {
    format!(
        "Berdasarkan informasi kegiatan pembelajaran PAUD berikut:

{info}

Harap berikan penjelasan detail teknis pelaksanaan dengan format berikut:

1. PERSIAPAN KEGIATAN
   - Penataan lingkungan
   - Persiapan media dan bahan
   - Pengaturan kelompok
   - Hal yang perlu diperhatikan

2. LANGKAH-LANGKAH PELAKSANAAN
   - Pembukaan/Apersepsi
   - Kegiatan Inti (step by step)
   - Transisi dan Variasi
   - Penutup/Evaluasi

3. TEKNIK PENGELOLAAN
   - Formasi dan pengaturan anak
   - Teknik pemberian instruksi
   - Strategi menarik perhatian
   - Penanganan situasi khusus

4. INTERAKSI & KOMUNIKASI
   - Contoh kalimat pembuka
   - Pertanyaan yang bisa diajukan
   - Respon terhadap anak
   - Penguatan positif

5. PENILAIAN PROSES
   - Indikator keberhasilan
   - Hal yang diamati
   - Catatan perkembangan
   - Tindak lanjut

6. TIPS & TRIK
   - Kunci keberhasilan
   - Antisipasi kendala
   - Modifikasi kegiatan
   - Alternatif kegiatan

Berikan dalam format yang praktis dan mudah dipahami oleh guru PAUD.

{MARKUP_GUIDE}
"
    )
}

fn assessment_guide_prompt(info: &str) -> String {
    format!(
        "Berdasarkan informasi pembelajaran PAUD berikut:

{info}

Harap buatkan panduan penilaian komprehensif dengan format berikut:

1. RUBRIK PENILAIAN
   Untuk setiap aspek perkembangan, berikan:
   - Indikator spesifik yang diamati
   - Kriteria BB (Belum Berkembang)
   - Kriteria MB (Mulai Berkembang)
   - Kriteria BSH (Berkembang Sesuai Harapan)
   - Kriteria BSB (Berkembang Sangat Baik)

2. INSTRUMEN OBSERVASI
   - Checklist observasi
   - Format catatan anekdot
   - Panduan dokumentasi
   - Skala capaian perkembangan

3. TEKNIK PENILAIAN
   A. Observasi
      - Hal-hal yang diamati
      - Waktu pengamatan
      - Cara mencatat
      - Format dokumentasi

   B. Unjuk Kerja
      - Kriteria penilaian
      - Langkah-langkah
      - Cara scoring
      - Format pencatatan

   C. Hasil Karya
      - Aspek yang dinilai
      - Kriteria penilaian
      - Cara dokumentasi
      - Format penilaian

4. PELAPORAN
   - Format laporan harian
   - Format laporan mingguan
   - Format laporan bulanan
   - Rekomendasi tindak lanjut

5. REKOMENDASI
   - Cara mengkomunikasikan dengan orangtua
   - Tindak lanjut untuk tiap tingkat pencapaian
   - Strategi pengembangan
   - Program penguatan

6. CONTOH PRAKTIS
   - Contoh pengisian instrumen
   - Contoh interpretasi hasil
   - Contoh laporan perkembangan
   - Contoh rekomendasi

Berikan dalam format yang praktis dan mudah digunakan guru PAUD dengan memperhatikan prinsip penilaian autentik, berkesinambungan, dan objektif."
    )
}

fn story_prompt(topic: &str) -> String {
    format!(
        "Berdasarkan informasi berikut:

{topic}

Tolong buatkan sebuah cerita edukatif untuk anak PAUD/TK dengan kriteria berikut:

1. FORMAT CERITA
   - Judul yang menarik dan mudah diingat
   - Paragraf pendek dan mudah dipahami
   - Alur cerita yang sederhana dan mengalir
   - Menggunakan bahasa yang sesuai anak PAUD/TK
   - Panjang cerita sesuai durasi yang diminta

2. KOMPONEN CERITA
   - Perkenalan tokoh yang jelas
   - Konflik/masalah yang sederhana
   - Penyelesaian yang positif
   - Pesan moral yang eksplisit
   - Dialog-dialog yang interaktif

3. ELEMEN PENDUKUNG
   - Deskripsi yang hidup dan imajinatif
   - Repetisi kata/frasa yang mudah diingat
   - Suara-suara atau onomatope yang menarik
   - Momen-momen yang mengundang partisipasi
   - Kejutan-kejutan kecil yang menyenangkan

4. PANDUAN PENYAMPAIAN
   - Momen untuk interaksi dengan anak
   - Pertanyaan-pertanyaan untuk diskusi
   - Aktivitas lanjutan yang bisa dilakukan

5. NILAI PEMBELAJARAN
   - Poin pembelajaran utama
   - Nilai moral yang disampaikan
   - Karakter yang dikembangkan
   - Keterampilan yang distimulasi

Buatkan cerita yang menyenangkan, mudah diingat, dan kaya akan nilai pembelajaran dengan tetap mempertahankan unsur hiburan yang sesuai usia anak."
    )
}
