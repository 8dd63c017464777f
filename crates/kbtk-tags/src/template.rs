//! Input templates for a fresh planning document.

use kbtk_core::{BodyError, DocumentBody, ParagraphHeading};
use tracing::info;

use crate::vocab::InputTag;

/// Field lines after the first keep a two-space indent.
const RPPH_TEMPLATE: &str = "\
INFORMASI DASAR:
  Jenjang: [PAUD/KB/TK]
  Kelompok: [A/B]
  Usia: [4-5 tahun / 5-6 tahun]
  Tema: [...]
  Subtema: [...]
  Semester: [1/2]
  Bulan: [...]
  Alokasi waktu: [contoh: 08.00-11.00 WIB]

  FOKUS PENGEMBANGAN:
  Aspek yang diprioritaskan: [mis: motorik halus, bahasa, dll]
  Pendekatan pembelajaran: [mis: sentra, area, kelompok]
  Metode: [mis: bercerita, eksperimen, proyek]
  Jenis kegiatan: [mis: outdoor, crafting, eksplorasi]

  KONDISI KELAS (opsional):
  Jumlah siswa: [...]
  Media pembelajaran tersedia: [...]
  Fasilitas: [...]";

const ACTIVITY_DETAIL_TEMPLATE: &str = "\
INFORMASI KEGIATAN:
Nama Kegiatan: [nama kegiatan yang ingin dijelaskan]
Jenis Kegiatan: [pembukaan/inti/istirahat/penutup]
Durasi: [estimasi waktu]
Jumlah Anak: [jumlah anak dalam kelompok]
Aspek Perkembangan: [aspek yang dikembangkan]

KONDISI & KEBUTUHAN:
Ruangan: [indoor/outdoor]
Media yang Tersedia: [daftar media]
Kendala yang Mungkin: [antisipasi kendala]
Target Capaian: [hasil yang diharapkan]";

const ASSESSMENT_TEMPLATE: &str = "\
INFORMASI PEMBELAJARAN:
Kelompok Usia: [A/B - usia anak]
Tema/Subtema: [tema pembelajaran]
Kegiatan: [kegiatan yang akan dinilai]
Aspek Penilaian: [aspek yang akan dinilai]

INDIKATOR PERKEMBANGAN:
1. Nilai Agama & Moral: [indikator yang relevan]
2. Fisik-Motorik: [indikator yang relevan]
3. Kognitif: [indikator yang relevan]
4. Bahasa: [indikator yang relevan]
5. Sosial-Emosional: [indikator yang relevan]
6. Seni: [indikator yang relevan]

KONDISI PENILAIAN:
Jumlah Anak: [jumlah anak yang dinilai]
Waktu Penilaian: [durasi/waktu]
Metode: [observasi/unjuk kerja/hasil karya/dll]";

const STORY_TOPIC_TEMPLATE: &str = "\
INFORMASI CERITA:
Tema: [tema yang diinginkan]
Usia Anak: [rentang usia target]
Durasi Cerita: [sekitar ... menit]
Nilai yang Diajarkan: [nilai moral/pembelajaran]
Karakter yang Diinginkan: [hewan/anak/profesi/dll]
Suasana Cerita: [ceria/petualangan/lucu/dll]";

/// Placeholder body the user fills in for `tag`.
pub const fn template_body(tag: InputTag) -> &'static str {
    match tag {
        InputTag::Rpph => RPPH_TEMPLATE,
        InputTag::ActivityDetail => ACTIVITY_DETAIL_TEMPLATE,
        InputTag::Assessment => ASSESSMENT_TEMPLATE,
        InputTag::StoryTopic => STORY_TOPIC_TEMPLATE,
    }
}

/// Clear the document and append every input block in vocabulary order.
///
/// Each block is laid out as six paragraphs: start marker (Heading 3), blank,
/// template body, blank, end marker, blank.
pub fn insert_all_templates<B: DocumentBody + ?Sized>(body: &mut B) -> Result<(), BodyError> {
    body.clear();
    for tag in InputTag::ALL {
        insert_template(body, tag)?;
    }
    info!(blocks = InputTag::ALL.len(), children = body.num_children(), "inserted input templates");
    Ok(())
}

fn insert_template<B: DocumentBody + ?Sized>(body: &mut B, tag: InputTag) -> Result<(), BodyError> {
    let opening = body.append_paragraph(&tag.start_marker());
    body.set_heading(opening, ParagraphHeading::Heading3)?;

    body.append_paragraph("");

    let content = body.append_paragraph(template_body(tag));
    body.set_heading(content, ParagraphHeading::Normal)?;

    body.append_paragraph("");

    let closing = body.append_paragraph(&tag.end_marker());
    body.set_heading(closing, ParagraphHeading::Normal)?;

    body.append_paragraph("");
    Ok(())
}
