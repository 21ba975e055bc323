// Copyright 2026 the html5kit Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The WHATWG named character reference table.
//!
//! Entries are sorted by name (names keep their trailing `;` where the
//! standard defines one; the semicolon-less legacy forms are separate
//! entries). Sorted order is what makes the tokenizer's greedy
//! longest-match scan cheap: an exact hit is a binary search and "could a
//! longer name still match" is a partition point probe.

/// Entity name (without the leading `&`) to one or two replacement
/// scalar values; a second value of `'\0'` means the entity expands to a
/// single character.
pub static NAMED_ENTITIES: &[(&str, [char; 2])] = &[
    ("AElig", ['\u{c6}', '\u{0}']),
    ("AElig;", ['\u{c6}', '\u{0}']),
    ("AMP", ['\u{26}', '\u{0}']),
    ("AMP;", ['\u{26}', '\u{0}']),
    ("Aacute", ['\u{c1}', '\u{0}']),
    ("Aacute;", ['\u{c1}', '\u{0}']),
    ("Abreve;", ['\u{102}', '\u{0}']),
    ("Acirc", ['\u{c2}', '\u{0}']),
    ("Acirc;", ['\u{c2}', '\u{0}']),
    ("Acy;", ['\u{410}', '\u{0}']),
    ("Afr;", ['\u{1d504}', '\u{0}']),
    ("Agrave", ['\u{c0}', '\u{0}']),
    ("Agrave;", ['\u{c0}', '\u{0}']),
    ("Alpha;", ['\u{391}', '\u{0}']),
    ("Amacr;", ['\u{100}', '\u{0}']),
    ("And;", ['\u{2a53}', '\u{0}']),
    ("Aogon;", ['\u{104}', '\u{0}']),
    ("Aopf;", ['\u{1d538}', '\u{0}']),
    ("ApplyFunction;", ['\u{2061}', '\u{0}']),
    ("Aring", ['\u{c5}', '\u{0}']),
    ("Aring;", ['\u{c5}', '\u{0}']),
    ("Ascr;", ['\u{1d49c}', '\u{0}']),
    ("Assign;", ['\u{2254}', '\u{0}']),
    ("Atilde", ['\u{c3}', '\u{0}']),
    ("Atilde;", ['\u{c3}', '\u{0}']),
    ("Auml", ['\u{c4}', '\u{0}']),
    ("Auml;", ['\u{c4}', '\u{0}']),
    ("Backslash;", ['\u{2216}', '\u{0}']),
    ("Barv;", ['\u{2ae7}', '\u{0}']),
    ("Barwed;", ['\u{2306}', '\u{0}']),
    ("Bcy;", ['\u{411}', '\u{0}']),
    ("Because;", ['\u{2235}', '\u{0}']),
    ("Bernoullis;", ['\u{212c}', '\u{0}']),
    ("Beta;", ['\u{392}', '\u{0}']),
    ("Bfr;", ['\u{1d505}', '\u{0}']),
    ("Bopf;", ['\u{1d539}', '\u{0}']),
    ("Breve;", ['\u{2d8}', '\u{0}']),
    ("Bscr;", ['\u{212c}', '\u{0}']),
    ("Bumpeq;", ['\u{224e}', '\u{0}']),
    ("CHcy;", ['\u{427}', '\u{0}']),
    ("COPY", ['\u{a9}', '\u{0}']),
    ("COPY;", ['\u{a9}', '\u{0}']),
    ("Cacute;", ['\u{106}', '\u{0}']),
    ("Cap;", ['\u{22d2}', '\u{0}']),
    ("CapitalDifferentialD;", ['\u{2145}', '\u{0}']),
    ("Cayleys;", ['\u{212d}', '\u{0}']),
    ("Ccaron;", ['\u{10c}', '\u{0}']),
    ("Ccedil", ['\u{c7}', '\u{0}']),
    ("Ccedil;", ['\u{c7}', '\u{0}']),
    ("Ccirc;", ['\u{108}', '\u{0}']),
    ("Cconint;", ['\u{2230}', '\u{0}']),
    ("Cdot;", ['\u{10a}', '\u{0}']),
    ("Cedilla;", ['\u{b8}', '\u{0}']),
    ("CenterDot;", ['\u{b7}', '\u{0}']),
    ("Cfr;", ['\u{212d}', '\u{0}']),
    ("Chi;", ['\u{3a7}', '\u{0}']),
    ("CircleDot;", ['\u{2299}', '\u{0}']),
    ("CircleMinus;", ['\u{2296}', '\u{0}']),
    ("CirclePlus;", ['\u{2295}', '\u{0}']),
    ("CircleTimes;", ['\u{2297}', '\u{0}']),
    ("ClockwiseContourIntegral;", ['\u{2232}', '\u{0}']),
    ("CloseCurlyDoubleQuote;", ['\u{201d}', '\u{0}']),
    ("CloseCurlyQuote;", ['\u{2019}', '\u{0}']),
    ("Colon;", ['\u{2237}', '\u{0}']),
    ("Colone;", ['\u{2a74}', '\u{0}']),
    ("Congruent;", ['\u{2261}', '\u{0}']),
    ("Conint;", ['\u{222f}', '\u{0}']),
    ("ContourIntegral;", ['\u{222e}', '\u{0}']),
    ("Copf;", ['\u{2102}', '\u{0}']),
    ("Coproduct;", ['\u{2210}', '\u{0}']),
    ("CounterClockwiseContourIntegral;", ['\u{2233}', '\u{0}']),
    ("Cross;", ['\u{2a2f}', '\u{0}']),
    ("Cscr;", ['\u{1d49e}', '\u{0}']),
    ("Cup;", ['\u{22d3}', '\u{0}']),
    ("CupCap;", ['\u{224d}', '\u{0}']),
    ("DD;", ['\u{2145}', '\u{0}']),
    ("DDotrahd;", ['\u{2911}', '\u{0}']),
    ("DJcy;", ['\u{402}', '\u{0}']),
    ("DScy;", ['\u{405}', '\u{0}']),
    ("DZcy;", ['\u{40f}', '\u{0}']),
    ("Dagger;", ['\u{2021}', '\u{0}']),
    ("Darr;", ['\u{21a1}', '\u{0}']),
    ("Dashv;", ['\u{2ae4}', '\u{0}']),
    ("Dcaron;", ['\u{10e}', '\u{0}']),
    ("Dcy;", ['\u{414}', '\u{0}']),
    ("Del;", ['\u{2207}', '\u{0}']),
    ("Delta;", ['\u{394}', '\u{0}']),
    ("Dfr;", ['\u{1d507}', '\u{0}']),
    ("DiacriticalAcute;", ['\u{b4}', '\u{0}']),
    ("DiacriticalDot;", ['\u{2d9}', '\u{0}']),
    ("DiacriticalDoubleAcute;", ['\u{2dd}', '\u{0}']),
    ("DiacriticalGrave;", ['\u{60}', '\u{0}']),
    ("DiacriticalTilde;", ['\u{2dc}', '\u{0}']),
    ("Diamond;", ['\u{22c4}', '\u{0}']),
    ("DifferentialD;", ['\u{2146}', '\u{0}']),
    ("Dopf;", ['\u{1d53b}', '\u{0}']),
    ("Dot;", ['\u{a8}', '\u{0}']),
    ("DotDot;", ['\u{20dc}', '\u{0}']),
    ("DotEqual;", ['\u{2250}', '\u{0}']),
    ("DoubleContourIntegral;", ['\u{222f}', '\u{0}']),
    ("DoubleDot;", ['\u{a8}', '\u{0}']),
    ("DoubleDownArrow;", ['\u{21d3}', '\u{0}']),
    ("DoubleLeftArrow;", ['\u{21d0}', '\u{0}']),
    ("DoubleLeftRightArrow;", ['\u{21d4}', '\u{0}']),
    ("DoubleLeftTee;", ['\u{2ae4}', '\u{0}']),
    ("DoubleLongLeftArrow;", ['\u{27f8}', '\u{0}']),
    ("DoubleLongLeftRightArrow;", ['\u{27fa}', '\u{0}']),
    ("DoubleLongRightArrow;", ['\u{27f9}', '\u{0}']),
    ("DoubleRightArrow;", ['\u{21d2}', '\u{0}']),
    ("DoubleRightTee;", ['\u{22a8}', '\u{0}']),
    ("DoubleUpArrow;", ['\u{21d1}', '\u{0}']),
    ("DoubleUpDownArrow;", ['\u{21d5}', '\u{0}']),
    ("DoubleVerticalBar;", ['\u{2225}', '\u{0}']),
    ("DownArrow;", ['\u{2193}', '\u{0}']),
    ("DownArrowBar;", ['\u{2913}', '\u{0}']),
    ("DownArrowUpArrow;", ['\u{21f5}', '\u{0}']),
    ("DownBreve;", ['\u{311}', '\u{0}']),
    ("DownLeftRightVector;", ['\u{2950}', '\u{0}']),
    ("DownLeftTeeVector;", ['\u{295e}', '\u{0}']),
    ("DownLeftVector;", ['\u{21bd}', '\u{0}']),
    ("DownLeftVectorBar;", ['\u{2956}', '\u{0}']),
    ("DownRightTeeVector;", ['\u{295f}', '\u{0}']),
    ("DownRightVector;", ['\u{21c1}', '\u{0}']),
    ("DownRightVectorBar;", ['\u{2957}', '\u{0}']),
    ("DownTee;", ['\u{22a4}', '\u{0}']),
    ("DownTeeArrow;", ['\u{21a7}', '\u{0}']),
    ("Downarrow;", ['\u{21d3}', '\u{0}']),
    ("Dscr;", ['\u{1d49f}', '\u{0}']),
    ("Dstrok;", ['\u{110}', '\u{0}']),
    ("ENG;", ['\u{14a}', '\u{0}']),
    ("ETH", ['\u{d0}', '\u{0}']),
    ("ETH;", ['\u{d0}', '\u{0}']),
    ("Eacute", ['\u{c9}', '\u{0}']),
    ("Eacute;", ['\u{c9}', '\u{0}']),
    ("Ecaron;", ['\u{11a}', '\u{0}']),
    ("Ecirc", ['\u{ca}', '\u{0}']),
    ("Ecirc;", ['\u{ca}', '\u{0}']),
    ("Ecy;", ['\u{42d}', '\u{0}']),
    ("Edot;", ['\u{116}', '\u{0}']),
    ("Efr;", ['\u{1d508}', '\u{0}']),
    ("Egrave", ['\u{c8}', '\u{0}']),
    ("Egrave;", ['\u{c8}', '\u{0}']),
    ("Element;", ['\u{2208}', '\u{0}']),
    ("Emacr;", ['\u{112}', '\u{0}']),
    ("EmptySmallSquare;", ['\u{25fb}', '\u{0}']),
    ("EmptyVerySmallSquare;", ['\u{25ab}', '\u{0}']),
    ("Eogon;", ['\u{118}', '\u{0}']),
    ("Eopf;", ['\u{1d53c}', '\u{0}']),
    ("Epsilon;", ['\u{395}', '\u{0}']),
    ("Equal;", ['\u{2a75}', '\u{0}']),
    ("EqualTilde;", ['\u{2242}', '\u{0}']),
    ("Equilibrium;", ['\u{21cc}', '\u{0}']),
    ("Escr;", ['\u{2130}', '\u{0}']),
    ("Esim;", ['\u{2a73}', '\u{0}']),
    ("Eta;", ['\u{397}', '\u{0}']),
    ("Euml", ['\u{cb}', '\u{0}']),
    ("Euml;", ['\u{cb}', '\u{0}']),
    ("Exists;", ['\u{2203}', '\u{0}']),
    ("ExponentialE;", ['\u{2147}', '\u{0}']),
    ("Fcy;", ['\u{424}', '\u{0}']),
    ("Ffr;", ['\u{1d509}', '\u{0}']),
    ("FilledSmallSquare;", ['\u{25fc}', '\u{0}']),
    ("FilledVerySmallSquare;", ['\u{25aa}', '\u{0}']),
    ("Fopf;", ['\u{1d53d}', '\u{0}']),
    ("ForAll;", ['\u{2200}', '\u{0}']),
    ("Fouriertrf;", ['\u{2131}', '\u{0}']),
    ("Fscr;", ['\u{2131}', '\u{0}']),
    ("GJcy;", ['\u{403}', '\u{0}']),
    ("GT", ['\u{3e}', '\u{0}']),
    ("GT;", ['\u{3e}', '\u{0}']),
    ("Gamma;", ['\u{393}', '\u{0}']),
    ("Gammad;", ['\u{3dc}', '\u{0}']),
    ("Gbreve;", ['\u{11e}', '\u{0}']),
    ("Gcedil;", ['\u{122}', '\u{0}']),
    ("Gcirc;", ['\u{11c}', '\u{0}']),
    ("Gcy;", ['\u{413}', '\u{0}']),
    ("Gdot;", ['\u{120}', '\u{0}']),
    ("Gfr;", ['\u{1d50a}', '\u{0}']),
    ("Gg;", ['\u{22d9}', '\u{0}']),
    ("Gopf;", ['\u{1d53e}', '\u{0}']),
    ("GreaterEqual;", ['\u{2265}', '\u{0}']),
    ("GreaterEqualLess;", ['\u{22db}', '\u{0}']),
    ("GreaterFullEqual;", ['\u{2267}', '\u{0}']),
    ("GreaterGreater;", ['\u{2aa2}', '\u{0}']),
    ("GreaterLess;", ['\u{2277}', '\u{0}']),
    ("GreaterSlantEqual;", ['\u{2a7e}', '\u{0}']),
    ("GreaterTilde;", ['\u{2273}', '\u{0}']),
    ("Gscr;", ['\u{1d4a2}', '\u{0}']),
    ("Gt;", ['\u{226b}', '\u{0}']),
    ("HARDcy;", ['\u{42a}', '\u{0}']),
    ("Hacek;", ['\u{2c7}', '\u{0}']),
    ("Hat;", ['\u{5e}', '\u{0}']),
    ("Hcirc;", ['\u{124}', '\u{0}']),
    ("Hfr;", ['\u{210c}', '\u{0}']),
    ("HilbertSpace;", ['\u{210b}', '\u{0}']),
    ("Hopf;", ['\u{210d}', '\u{0}']),
    ("HorizontalLine;", ['\u{2500}', '\u{0}']),
    ("Hscr;", ['\u{210b}', '\u{0}']),
    ("Hstrok;", ['\u{126}', '\u{0}']),
    ("HumpDownHump;", ['\u{224e}', '\u{0}']),
    ("HumpEqual;", ['\u{224f}', '\u{0}']),
    ("IEcy;", ['\u{415}', '\u{0}']),
    ("IJlig;", ['\u{132}', '\u{0}']),
    ("IOcy;", ['\u{401}', '\u{0}']),
    ("Iacute", ['\u{cd}', '\u{0}']),
    ("Iacute;", ['\u{cd}', '\u{0}']),
    ("Icirc", ['\u{ce}', '\u{0}']),
    ("Icirc;", ['\u{ce}', '\u{0}']),
    ("Icy;", ['\u{418}', '\u{0}']),
    ("Idot;", ['\u{130}', '\u{0}']),
    ("Ifr;", ['\u{2111}', '\u{0}']),
    ("Igrave", ['\u{cc}', '\u{0}']),
    ("Igrave;", ['\u{cc}', '\u{0}']),
    ("Im;", ['\u{2111}', '\u{0}']),
    ("Imacr;", ['\u{12a}', '\u{0}']),
    ("ImaginaryI;", ['\u{2148}', '\u{0}']),
    ("Implies;", ['\u{21d2}', '\u{0}']),
    ("Int;", ['\u{222c}', '\u{0}']),
    ("Integral;", ['\u{222b}', '\u{0}']),
    ("Intersection;", ['\u{22c2}', '\u{0}']),
    ("InvisibleComma;", ['\u{2063}', '\u{0}']),
    ("InvisibleTimes;", ['\u{2062}', '\u{0}']),
    ("Iogon;", ['\u{12e}', '\u{0}']),
    ("Iopf;", ['\u{1d540}', '\u{0}']),
    ("Iota;", ['\u{399}', '\u{0}']),
    ("Iscr;", ['\u{2110}', '\u{0}']),
    ("Itilde;", ['\u{128}', '\u{0}']),
    ("Iukcy;", ['\u{406}', '\u{0}']),
    ("Iuml", ['\u{cf}', '\u{0}']),
    ("Iuml;", ['\u{cf}', '\u{0}']),
    ("Jcirc;", ['\u{134}', '\u{0}']),
    ("Jcy;", ['\u{419}', '\u{0}']),
    ("Jfr;", ['\u{1d50d}', '\u{0}']),
    ("Jopf;", ['\u{1d541}', '\u{0}']),
    ("Jscr;", ['\u{1d4a5}', '\u{0}']),
    ("Jsercy;", ['\u{408}', '\u{0}']),
    ("Jukcy;", ['\u{404}', '\u{0}']),
    ("KHcy;", ['\u{425}', '\u{0}']),
    ("KJcy;", ['\u{40c}', '\u{0}']),
    ("Kappa;", ['\u{39a}', '\u{0}']),
    ("Kcedil;", ['\u{136}', '\u{0}']),
    ("Kcy;", ['\u{41a}', '\u{0}']),
    ("Kfr;", ['\u{1d50e}', '\u{0}']),
    ("Kopf;", ['\u{1d542}', '\u{0}']),
    ("Kscr;", ['\u{1d4a6}', '\u{0}']),
    ("LJcy;", ['\u{409}', '\u{0}']),
    ("LT", ['\u{3c}', '\u{0}']),
    ("LT;", ['\u{3c}', '\u{0}']),
    ("Lacute;", ['\u{139}', '\u{0}']),
    ("Lambda;", ['\u{39b}', '\u{0}']),
    ("Lang;", ['\u{27ea}', '\u{0}']),
    ("Laplacetrf;", ['\u{2112}', '\u{0}']),
    ("Larr;", ['\u{219e}', '\u{0}']),
    ("Lcaron;", ['\u{13d}', '\u{0}']),
    ("Lcedil;", ['\u{13b}', '\u{0}']),
    ("Lcy;", ['\u{41b}', '\u{0}']),
    ("LeftAngleBracket;", ['\u{27e8}', '\u{0}']),
    ("LeftArrow;", ['\u{2190}', '\u{0}']),
    ("LeftArrowBar;", ['\u{21e4}', '\u{0}']),
    ("LeftArrowRightArrow;", ['\u{21c6}', '\u{0}']),
    ("LeftCeiling;", ['\u{2308}', '\u{0}']),
    ("LeftDoubleBracket;", ['\u{27e6}', '\u{0}']),
    ("LeftDownTeeVector;", ['\u{2961}', '\u{0}']),
    ("LeftDownVector;", ['\u{21c3}', '\u{0}']),
    ("LeftDownVectorBar;", ['\u{2959}', '\u{0}']),
    ("LeftFloor;", ['\u{230a}', '\u{0}']),
    ("LeftRightArrow;", ['\u{2194}', '\u{0}']),
    ("LeftRightVector;", ['\u{294e}', '\u{0}']),
    ("LeftTee;", ['\u{22a3}', '\u{0}']),
    ("LeftTeeArrow;", ['\u{21a4}', '\u{0}']),
    ("LeftTeeVector;", ['\u{295a}', '\u{0}']),
    ("LeftTriangle;", ['\u{22b2}', '\u{0}']),
    ("LeftTriangleBar;", ['\u{29cf}', '\u{0}']),
    ("LeftTriangleEqual;", ['\u{22b4}', '\u{0}']),
    ("LeftUpDownVector;", ['\u{2951}', '\u{0}']),
    ("LeftUpTeeVector;", ['\u{2960}', '\u{0}']),
    ("LeftUpVector;", ['\u{21bf}', '\u{0}']),
    ("LeftUpVectorBar;", ['\u{2958}', '\u{0}']),
    ("LeftVector;", ['\u{21bc}', '\u{0}']),
    ("LeftVectorBar;", ['\u{2952}', '\u{0}']),
    ("Leftarrow;", ['\u{21d0}', '\u{0}']),
    ("Leftrightarrow;", ['\u{21d4}', '\u{0}']),
    ("LessEqualGreater;", ['\u{22da}', '\u{0}']),
    ("LessFullEqual;", ['\u{2266}', '\u{0}']),
    ("LessGreater;", ['\u{2276}', '\u{0}']),
    ("LessLess;", ['\u{2aa1}', '\u{0}']),
    ("LessSlantEqual;", ['\u{2a7d}', '\u{0}']),
    ("LessTilde;", ['\u{2272}', '\u{0}']),
    ("Lfr;", ['\u{1d50f}', '\u{0}']),
    ("Ll;", ['\u{22d8}', '\u{0}']),
    ("Lleftarrow;", ['\u{21da}', '\u{0}']),
    ("Lmidot;", ['\u{13f}', '\u{0}']),
    ("LongLeftArrow;", ['\u{27f5}', '\u{0}']),
    ("LongLeftRightArrow;", ['\u{27f7}', '\u{0}']),
    ("LongRightArrow;", ['\u{27f6}', '\u{0}']),
    ("Longleftarrow;", ['\u{27f8}', '\u{0}']),
    ("Longleftrightarrow;", ['\u{27fa}', '\u{0}']),
    ("Longrightarrow;", ['\u{27f9}', '\u{0}']),
    ("Lopf;", ['\u{1d543}', '\u{0}']),
    ("LowerLeftArrow;", ['\u{2199}', '\u{0}']),
    ("LowerRightArrow;", ['\u{2198}', '\u{0}']),
    ("Lscr;", ['\u{2112}', '\u{0}']),
    ("Lsh;", ['\u{21b0}', '\u{0}']),
    ("Lstrok;", ['\u{141}', '\u{0}']),
    ("Lt;", ['\u{226a}', '\u{0}']),
    ("Map;", ['\u{2905}', '\u{0}']),
    ("Mcy;", ['\u{41c}', '\u{0}']),
    ("MediumSpace;", ['\u{205f}', '\u{0}']),
    ("Mellintrf;", ['\u{2133}', '\u{0}']),
    ("Mfr;", ['\u{1d510}', '\u{0}']),
    ("MinusPlus;", ['\u{2213}', '\u{0}']),
    ("Mopf;", ['\u{1d544}', '\u{0}']),
    ("Mscr;", ['\u{2133}', '\u{0}']),
    ("Mu;", ['\u{39c}', '\u{0}']),
    ("NJcy;", ['\u{40a}', '\u{0}']),
    ("Nacute;", ['\u{143}', '\u{0}']),
    ("Ncaron;", ['\u{147}', '\u{0}']),
    ("Ncedil;", ['\u{145}', '\u{0}']),
    ("Ncy;", ['\u{41d}', '\u{0}']),
    ("NegativeMediumSpace;", ['\u{200b}', '\u{0}']),
    ("NegativeThickSpace;", ['\u{200b}', '\u{0}']),
    ("NegativeThinSpace;", ['\u{200b}', '\u{0}']),
    ("NegativeVeryThinSpace;", ['\u{200b}', '\u{0}']),
    ("NestedGreaterGreater;", ['\u{226b}', '\u{0}']),
    ("NestedLessLess;", ['\u{226a}', '\u{0}']),
    ("NewLine;", ['\u{a}', '\u{0}']),
    ("Nfr;", ['\u{1d511}', '\u{0}']),
    ("NoBreak;", ['\u{2060}', '\u{0}']),
    ("NonBreakingSpace;", ['\u{a0}', '\u{0}']),
    ("Nopf;", ['\u{2115}', '\u{0}']),
    ("Not;", ['\u{2aec}', '\u{0}']),
    ("NotCongruent;", ['\u{2262}', '\u{0}']),
    ("NotCupCap;", ['\u{226d}', '\u{0}']),
    ("NotDoubleVerticalBar;", ['\u{2226}', '\u{0}']),
    ("NotElement;", ['\u{2209}', '\u{0}']),
    ("NotEqual;", ['\u{2260}', '\u{0}']),
    ("NotEqualTilde;", ['\u{2242}', '\u{338}']),
    ("NotExists;", ['\u{2204}', '\u{0}']),
    ("NotGreater;", ['\u{226f}', '\u{0}']),
    ("NotGreaterEqual;", ['\u{2271}', '\u{0}']),
    ("NotGreaterFullEqual;", ['\u{2267}', '\u{338}']),
    ("NotGreaterGreater;", ['\u{226b}', '\u{338}']),
    ("NotGreaterLess;", ['\u{2279}', '\u{0}']),
    ("NotGreaterSlantEqual;", ['\u{2a7e}', '\u{338}']),
    ("NotGreaterTilde;", ['\u{2275}', '\u{0}']),
    ("NotHumpDownHump;", ['\u{224e}', '\u{338}']),
    ("NotHumpEqual;", ['\u{224f}', '\u{338}']),
    ("NotLeftTriangle;", ['\u{22ea}', '\u{0}']),
    ("NotLeftTriangleBar;", ['\u{29cf}', '\u{338}']),
    ("NotLeftTriangleEqual;", ['\u{22ec}', '\u{0}']),
    ("NotLess;", ['\u{226e}', '\u{0}']),
    ("NotLessEqual;", ['\u{2270}', '\u{0}']),
    ("NotLessGreater;", ['\u{2278}', '\u{0}']),
    ("NotLessLess;", ['\u{226a}', '\u{338}']),
    ("NotLessSlantEqual;", ['\u{2a7d}', '\u{338}']),
    ("NotLessTilde;", ['\u{2274}', '\u{0}']),
    ("NotNestedGreaterGreater;", ['\u{2aa2}', '\u{338}']),
    ("NotNestedLessLess;", ['\u{2aa1}', '\u{338}']),
    ("NotPrecedes;", ['\u{2280}', '\u{0}']),
    ("NotPrecedesEqual;", ['\u{2aaf}', '\u{338}']),
    ("NotPrecedesSlantEqual;", ['\u{22e0}', '\u{0}']),
    ("NotReverseElement;", ['\u{220c}', '\u{0}']),
    ("NotRightTriangle;", ['\u{22eb}', '\u{0}']),
    ("NotRightTriangleBar;", ['\u{29d0}', '\u{338}']),
    ("NotRightTriangleEqual;", ['\u{22ed}', '\u{0}']),
    ("NotSquareSubset;", ['\u{228f}', '\u{338}']),
    ("NotSquareSubsetEqual;", ['\u{22e2}', '\u{0}']),
    ("NotSquareSuperset;", ['\u{2290}', '\u{338}']),
    ("NotSquareSupersetEqual;", ['\u{22e3}', '\u{0}']),
    ("NotSubset;", ['\u{2282}', '\u{20d2}']),
    ("NotSubsetEqual;", ['\u{2288}', '\u{0}']),
    ("NotSucceeds;", ['\u{2281}', '\u{0}']),
    ("NotSucceedsEqual;", ['\u{2ab0}', '\u{338}']),
    ("NotSucceedsSlantEqual;", ['\u{22e1}', '\u{0}']),
    ("NotSucceedsTilde;", ['\u{227f}', '\u{338}']),
    ("NotSuperset;", ['\u{2283}', '\u{20d2}']),
    ("NotSupersetEqual;", ['\u{2289}', '\u{0}']),
    ("NotTilde;", ['\u{2241}', '\u{0}']),
    ("NotTildeEqual;", ['\u{2244}', '\u{0}']),
    ("NotTildeFullEqual;", ['\u{2247}', '\u{0}']),
    ("NotTildeTilde;", ['\u{2249}', '\u{0}']),
    ("NotVerticalBar;", ['\u{2224}', '\u{0}']),
    ("Nscr;", ['\u{1d4a9}', '\u{0}']),
    ("Ntilde", ['\u{d1}', '\u{0}']),
    ("Ntilde;", ['\u{d1}', '\u{0}']),
    ("Nu;", ['\u{39d}', '\u{0}']),
    ("OElig;", ['\u{152}', '\u{0}']),
    ("Oacute", ['\u{d3}', '\u{0}']),
    ("Oacute;", ['\u{d3}', '\u{0}']),
    ("Ocirc", ['\u{d4}', '\u{0}']),
    ("Ocirc;", ['\u{d4}', '\u{0}']),
    ("Ocy;", ['\u{41e}', '\u{0}']),
    ("Odblac;", ['\u{150}', '\u{0}']),
    ("Ofr;", ['\u{1d512}', '\u{0}']),
    ("Ograve", ['\u{d2}', '\u{0}']),
    ("Ograve;", ['\u{d2}', '\u{0}']),
    ("Omacr;", ['\u{14c}', '\u{0}']),
    ("Omega;", ['\u{3a9}', '\u{0}']),
    ("Omicron;", ['\u{39f}', '\u{0}']),
    ("Oopf;", ['\u{1d546}', '\u{0}']),
    ("OpenCurlyDoubleQuote;", ['\u{201c}', '\u{0}']),
    ("OpenCurlyQuote;", ['\u{2018}', '\u{0}']),
    ("Or;", ['\u{2a54}', '\u{0}']),
    ("Oscr;", ['\u{1d4aa}', '\u{0}']),
    ("Oslash", ['\u{d8}', '\u{0}']),
    ("Oslash;", ['\u{d8}', '\u{0}']),
    ("Otilde", ['\u{d5}', '\u{0}']),
    ("Otilde;", ['\u{d5}', '\u{0}']),
    ("Otimes;", ['\u{2a37}', '\u{0}']),
    ("Ouml", ['\u{d6}', '\u{0}']),
    ("Ouml;", ['\u{d6}', '\u{0}']),
    ("OverBar;", ['\u{203e}', '\u{0}']),
    ("OverBrace;", ['\u{23de}', '\u{0}']),
    ("OverBracket;", ['\u{23b4}', '\u{0}']),
    ("OverParenthesis;", ['\u{23dc}', '\u{0}']),
    ("PartialD;", ['\u{2202}', '\u{0}']),
    ("Pcy;", ['\u{41f}', '\u{0}']),
    ("Pfr;", ['\u{1d513}', '\u{0}']),
    ("Phi;", ['\u{3a6}', '\u{0}']),
    ("Pi;", ['\u{3a0}', '\u{0}']),
    ("PlusMinus;", ['\u{b1}', '\u{0}']),
    ("Poincareplane;", ['\u{210c}', '\u{0}']),
    ("Popf;", ['\u{2119}', '\u{0}']),
    ("Pr;", ['\u{2abb}', '\u{0}']),
    ("Precedes;", ['\u{227a}', '\u{0}']),
    ("PrecedesEqual;", ['\u{2aaf}', '\u{0}']),
    ("PrecedesSlantEqual;", ['\u{227c}', '\u{0}']),
    ("PrecedesTilde;", ['\u{227e}', '\u{0}']),
    ("Prime;", ['\u{2033}', '\u{0}']),
    ("Product;", ['\u{220f}', '\u{0}']),
    ("Proportion;", ['\u{2237}', '\u{0}']),
    ("Proportional;", ['\u{221d}', '\u{0}']),
    ("Pscr;", ['\u{1d4ab}', '\u{0}']),
    ("Psi;", ['\u{3a8}', '\u{0}']),
    ("QUOT", ['\u{22}', '\u{0}']),
    ("QUOT;", ['\u{22}', '\u{0}']),
    ("Qfr;", ['\u{1d514}', '\u{0}']),
    ("Qopf;", ['\u{211a}', '\u{0}']),
    ("Qscr;", ['\u{1d4ac}', '\u{0}']),
    ("RBarr;", ['\u{2910}', '\u{0}']),
    ("REG", ['\u{ae}', '\u{0}']),
    ("REG;", ['\u{ae}', '\u{0}']),
    ("Racute;", ['\u{154}', '\u{0}']),
    ("Rang;", ['\u{27eb}', '\u{0}']),
    ("Rarr;", ['\u{21a0}', '\u{0}']),
    ("Rarrtl;", ['\u{2916}', '\u{0}']),
    ("Rcaron;", ['\u{158}', '\u{0}']),
    ("Rcedil;", ['\u{156}', '\u{0}']),
    ("Rcy;", ['\u{420}', '\u{0}']),
    ("Re;", ['\u{211c}', '\u{0}']),
    ("ReverseElement;", ['\u{220b}', '\u{0}']),
    ("ReverseEquilibrium;", ['\u{21cb}', '\u{0}']),
    ("ReverseUpEquilibrium;", ['\u{296f}', '\u{0}']),
    ("Rfr;", ['\u{211c}', '\u{0}']),
    ("Rho;", ['\u{3a1}', '\u{0}']),
    ("RightAngleBracket;", ['\u{27e9}', '\u{0}']),
    ("RightArrow;", ['\u{2192}', '\u{0}']),
    ("RightArrowBar;", ['\u{21e5}', '\u{0}']),
    ("RightArrowLeftArrow;", ['\u{21c4}', '\u{0}']),
    ("RightCeiling;", ['\u{2309}', '\u{0}']),
    ("RightDoubleBracket;", ['\u{27e7}', '\u{0}']),
    ("RightDownTeeVector;", ['\u{295d}', '\u{0}']),
    ("RightDownVector;", ['\u{21c2}', '\u{0}']),
    ("RightDownVectorBar;", ['\u{2955}', '\u{0}']),
    ("RightFloor;", ['\u{230b}', '\u{0}']),
    ("RightTee;", ['\u{22a2}', '\u{0}']),
    ("RightTeeArrow;", ['\u{21a6}', '\u{0}']),
    ("RightTeeVector;", ['\u{295b}', '\u{0}']),
    ("RightTriangle;", ['\u{22b3}', '\u{0}']),
    ("RightTriangleBar;", ['\u{29d0}', '\u{0}']),
    ("RightTriangleEqual;", ['\u{22b5}', '\u{0}']),
    ("RightUpDownVector;", ['\u{294f}', '\u{0}']),
    ("RightUpTeeVector;", ['\u{295c}', '\u{0}']),
    ("RightUpVector;", ['\u{21be}', '\u{0}']),
    ("RightUpVectorBar;", ['\u{2954}', '\u{0}']),
    ("RightVector;", ['\u{21c0}', '\u{0}']),
    ("RightVectorBar;", ['\u{2953}', '\u{0}']),
    ("Rightarrow;", ['\u{21d2}', '\u{0}']),
    ("Ropf;", ['\u{211d}', '\u{0}']),
    ("RoundImplies;", ['\u{2970}', '\u{0}']),
    ("Rrightarrow;", ['\u{21db}', '\u{0}']),
    ("Rscr;", ['\u{211b}', '\u{0}']),
    ("Rsh;", ['\u{21b1}', '\u{0}']),
    ("RuleDelayed;", ['\u{29f4}', '\u{0}']),
    ("SHCHcy;", ['\u{429}', '\u{0}']),
    ("SHcy;", ['\u{428}', '\u{0}']),
    ("SOFTcy;", ['\u{42c}', '\u{0}']),
    ("Sacute;", ['\u{15a}', '\u{0}']),
    ("Sc;", ['\u{2abc}', '\u{0}']),
    ("Scaron;", ['\u{160}', '\u{0}']),
    ("Scedil;", ['\u{15e}', '\u{0}']),
    ("Scirc;", ['\u{15c}', '\u{0}']),
    ("Scy;", ['\u{421}', '\u{0}']),
    ("Sfr;", ['\u{1d516}', '\u{0}']),
    ("ShortDownArrow;", ['\u{2193}', '\u{0}']),
    ("ShortLeftArrow;", ['\u{2190}', '\u{0}']),
    ("ShortRightArrow;", ['\u{2192}', '\u{0}']),
    ("ShortUpArrow;", ['\u{2191}', '\u{0}']),
    ("Sigma;", ['\u{3a3}', '\u{0}']),
    ("SmallCircle;", ['\u{2218}', '\u{0}']),
    ("Sopf;", ['\u{1d54a}', '\u{0}']),
    ("Sqrt;", ['\u{221a}', '\u{0}']),
    ("Square;", ['\u{25a1}', '\u{0}']),
    ("SquareIntersection;", ['\u{2293}', '\u{0}']),
    ("SquareSubset;", ['\u{228f}', '\u{0}']),
    ("SquareSubsetEqual;", ['\u{2291}', '\u{0}']),
    ("SquareSuperset;", ['\u{2290}', '\u{0}']),
    ("SquareSupersetEqual;", ['\u{2292}', '\u{0}']),
    ("SquareUnion;", ['\u{2294}', '\u{0}']),
    ("Sscr;", ['\u{1d4ae}', '\u{0}']),
    ("Star;", ['\u{22c6}', '\u{0}']),
    ("Sub;", ['\u{22d0}', '\u{0}']),
    ("Subset;", ['\u{22d0}', '\u{0}']),
    ("SubsetEqual;", ['\u{2286}', '\u{0}']),
    ("Succeeds;", ['\u{227b}', '\u{0}']),
    ("SucceedsEqual;", ['\u{2ab0}', '\u{0}']),
    ("SucceedsSlantEqual;", ['\u{227d}', '\u{0}']),
    ("SucceedsTilde;", ['\u{227f}', '\u{0}']),
    ("SuchThat;", ['\u{220b}', '\u{0}']),
    ("Sum;", ['\u{2211}', '\u{0}']),
    ("Sup;", ['\u{22d1}', '\u{0}']),
    ("Superset;", ['\u{2283}', '\u{0}']),
    ("SupersetEqual;", ['\u{2287}', '\u{0}']),
    ("Supset;", ['\u{22d1}', '\u{0}']),
    ("THORN", ['\u{de}', '\u{0}']),
    ("THORN;", ['\u{de}', '\u{0}']),
    ("TRADE;", ['\u{2122}', '\u{0}']),
    ("TSHcy;", ['\u{40b}', '\u{0}']),
    ("TScy;", ['\u{426}', '\u{0}']),
    ("Tab;", ['\u{9}', '\u{0}']),
    ("Tau;", ['\u{3a4}', '\u{0}']),
    ("Tcaron;", ['\u{164}', '\u{0}']),
    ("Tcedil;", ['\u{162}', '\u{0}']),
    ("Tcy;", ['\u{422}', '\u{0}']),
    ("Tfr;", ['\u{1d517}', '\u{0}']),
    ("Therefore;", ['\u{2234}', '\u{0}']),
    ("Theta;", ['\u{398}', '\u{0}']),
    ("ThickSpace;", ['\u{205f}', '\u{200a}']),
    ("ThinSpace;", ['\u{2009}', '\u{0}']),
    ("Tilde;", ['\u{223c}', '\u{0}']),
    ("TildeEqual;", ['\u{2243}', '\u{0}']),
    ("TildeFullEqual;", ['\u{2245}', '\u{0}']),
    ("TildeTilde;", ['\u{2248}', '\u{0}']),
    ("Topf;", ['\u{1d54b}', '\u{0}']),
    ("TripleDot;", ['\u{20db}', '\u{0}']),
    ("Tscr;", ['\u{1d4af}', '\u{0}']),
    ("Tstrok;", ['\u{166}', '\u{0}']),
    ("Uacute", ['\u{da}', '\u{0}']),
    ("Uacute;", ['\u{da}', '\u{0}']),
    ("Uarr;", ['\u{219f}', '\u{0}']),
    ("Uarrocir;", ['\u{2949}', '\u{0}']),
    ("Ubrcy;", ['\u{40e}', '\u{0}']),
    ("Ubreve;", ['\u{16c}', '\u{0}']),
    ("Ucirc", ['\u{db}', '\u{0}']),
    ("Ucirc;", ['\u{db}', '\u{0}']),
    ("Ucy;", ['\u{423}', '\u{0}']),
    ("Udblac;", ['\u{170}', '\u{0}']),
    ("Ufr;", ['\u{1d518}', '\u{0}']),
    ("Ugrave", ['\u{d9}', '\u{0}']),
    ("Ugrave;", ['\u{d9}', '\u{0}']),
    ("Umacr;", ['\u{16a}', '\u{0}']),
    ("UnderBar;", ['\u{5f}', '\u{0}']),
    ("UnderBrace;", ['\u{23df}', '\u{0}']),
    ("UnderBracket;", ['\u{23b5}', '\u{0}']),
    ("UnderParenthesis;", ['\u{23dd}', '\u{0}']),
    ("Union;", ['\u{22c3}', '\u{0}']),
    ("UnionPlus;", ['\u{228e}', '\u{0}']),
    ("Uogon;", ['\u{172}', '\u{0}']),
    ("Uopf;", ['\u{1d54c}', '\u{0}']),
    ("UpArrow;", ['\u{2191}', '\u{0}']),
    ("UpArrowBar;", ['\u{2912}', '\u{0}']),
    ("UpArrowDownArrow;", ['\u{21c5}', '\u{0}']),
    ("UpDownArrow;", ['\u{2195}', '\u{0}']),
    ("UpEquilibrium;", ['\u{296e}', '\u{0}']),
    ("UpTee;", ['\u{22a5}', '\u{0}']),
    ("UpTeeArrow;", ['\u{21a5}', '\u{0}']),
    ("Uparrow;", ['\u{21d1}', '\u{0}']),
    ("Updownarrow;", ['\u{21d5}', '\u{0}']),
    ("UpperLeftArrow;", ['\u{2196}', '\u{0}']),
    ("UpperRightArrow;", ['\u{2197}', '\u{0}']),
    ("Upsi;", ['\u{3d2}', '\u{0}']),
    ("Upsilon;", ['\u{3a5}', '\u{0}']),
    ("Uring;", ['\u{16e}', '\u{0}']),
    ("Uscr;", ['\u{1d4b0}', '\u{0}']),
    ("Utilde;", ['\u{168}', '\u{0}']),
    ("Uuml", ['\u{dc}', '\u{0}']),
    ("Uuml;", ['\u{dc}', '\u{0}']),
    ("VDash;", ['\u{22ab}', '\u{0}']),
    ("Vbar;", ['\u{2aeb}', '\u{0}']),
    ("Vcy;", ['\u{412}', '\u{0}']),
    ("Vdash;", ['\u{22a9}', '\u{0}']),
    ("Vdashl;", ['\u{2ae6}', '\u{0}']),
    ("Vee;", ['\u{22c1}', '\u{0}']),
    ("Verbar;", ['\u{2016}', '\u{0}']),
    ("Vert;", ['\u{2016}', '\u{0}']),
    ("VerticalBar;", ['\u{2223}', '\u{0}']),
    ("VerticalLine;", ['\u{7c}', '\u{0}']),
    ("VerticalSeparator;", ['\u{2758}', '\u{0}']),
    ("VerticalTilde;", ['\u{2240}', '\u{0}']),
    ("VeryThinSpace;", ['\u{200a}', '\u{0}']),
    ("Vfr;", ['\u{1d519}', '\u{0}']),
    ("Vopf;", ['\u{1d54d}', '\u{0}']),
    ("Vscr;", ['\u{1d4b1}', '\u{0}']),
    ("Vvdash;", ['\u{22aa}', '\u{0}']),
    ("Wcirc;", ['\u{174}', '\u{0}']),
    ("Wedge;", ['\u{22c0}', '\u{0}']),
    ("Wfr;", ['\u{1d51a}', '\u{0}']),
    ("Wopf;", ['\u{1d54e}', '\u{0}']),
    ("Wscr;", ['\u{1d4b2}', '\u{0}']),
    ("Xfr;", ['\u{1d51b}', '\u{0}']),
    ("Xi;", ['\u{39e}', '\u{0}']),
    ("Xopf;", ['\u{1d54f}', '\u{0}']),
    ("Xscr;", ['\u{1d4b3}', '\u{0}']),
    ("YAcy;", ['\u{42f}', '\u{0}']),
    ("YIcy;", ['\u{407}', '\u{0}']),
    ("YUcy;", ['\u{42e}', '\u{0}']),
    ("Yacute", ['\u{dd}', '\u{0}']),
    ("Yacute;", ['\u{dd}', '\u{0}']),
    ("Ycirc;", ['\u{176}', '\u{0}']),
    ("Ycy;", ['\u{42b}', '\u{0}']),
    ("Yfr;", ['\u{1d51c}', '\u{0}']),
    ("Yopf;", ['\u{1d550}', '\u{0}']),
    ("Yscr;", ['\u{1d4b4}', '\u{0}']),
    ("Yuml;", ['\u{178}', '\u{0}']),
    ("ZHcy;", ['\u{416}', '\u{0}']),
    ("Zacute;", ['\u{179}', '\u{0}']),
    ("Zcaron;", ['\u{17d}', '\u{0}']),
    ("Zcy;", ['\u{417}', '\u{0}']),
    ("Zdot;", ['\u{17b}', '\u{0}']),
    ("ZeroWidthSpace;", ['\u{200b}', '\u{0}']),
    ("Zeta;", ['\u{396}', '\u{0}']),
    ("Zfr;", ['\u{2128}', '\u{0}']),
    ("Zopf;", ['\u{2124}', '\u{0}']),
    ("Zscr;", ['\u{1d4b5}', '\u{0}']),
    ("aacute", ['\u{e1}', '\u{0}']),
    ("aacute;", ['\u{e1}', '\u{0}']),
    ("abreve;", ['\u{103}', '\u{0}']),
    ("ac;", ['\u{223e}', '\u{0}']),
    ("acE;", ['\u{223e}', '\u{333}']),
    ("acd;", ['\u{223f}', '\u{0}']),
    ("acirc", ['\u{e2}', '\u{0}']),
    ("acirc;", ['\u{e2}', '\u{0}']),
    ("acute", ['\u{b4}', '\u{0}']),
    ("acute;", ['\u{b4}', '\u{0}']),
    ("acy;", ['\u{430}', '\u{0}']),
    ("aelig", ['\u{e6}', '\u{0}']),
    ("aelig;", ['\u{e6}', '\u{0}']),
    ("af;", ['\u{2061}', '\u{0}']),
    ("afr;", ['\u{1d51e}', '\u{0}']),
    ("agrave", ['\u{e0}', '\u{0}']),
    ("agrave;", ['\u{e0}', '\u{0}']),
    ("alefsym;", ['\u{2135}', '\u{0}']),
    ("aleph;", ['\u{2135}', '\u{0}']),
    ("alpha;", ['\u{3b1}', '\u{0}']),
    ("amacr;", ['\u{101}', '\u{0}']),
    ("amalg;", ['\u{2a3f}', '\u{0}']),
    ("amp", ['\u{26}', '\u{0}']),
    ("amp;", ['\u{26}', '\u{0}']),
    ("and;", ['\u{2227}', '\u{0}']),
    ("andand;", ['\u{2a55}', '\u{0}']),
    ("andd;", ['\u{2a5c}', '\u{0}']),
    ("andslope;", ['\u{2a58}', '\u{0}']),
    ("andv;", ['\u{2a5a}', '\u{0}']),
    ("ang;", ['\u{2220}', '\u{0}']),
    ("ange;", ['\u{29a4}', '\u{0}']),
    ("angle;", ['\u{2220}', '\u{0}']),
    ("angmsd;", ['\u{2221}', '\u{0}']),
    ("angmsdaa;", ['\u{29a8}', '\u{0}']),
    ("angmsdab;", ['\u{29a9}', '\u{0}']),
    ("angmsdac;", ['\u{29aa}', '\u{0}']),
    ("angmsdad;", ['\u{29ab}', '\u{0}']),
    ("angmsdae;", ['\u{29ac}', '\u{0}']),
    ("angmsdaf;", ['\u{29ad}', '\u{0}']),
    ("angmsdag;", ['\u{29ae}', '\u{0}']),
    ("angmsdah;", ['\u{29af}', '\u{0}']),
    ("angrt;", ['\u{221f}', '\u{0}']),
    ("angrtvb;", ['\u{22be}', '\u{0}']),
    ("angrtvbd;", ['\u{299d}', '\u{0}']),
    ("angsph;", ['\u{2222}', '\u{0}']),
    ("angst;", ['\u{c5}', '\u{0}']),
    ("angzarr;", ['\u{237c}', '\u{0}']),
    ("aogon;", ['\u{105}', '\u{0}']),
    ("aopf;", ['\u{1d552}', '\u{0}']),
    ("ap;", ['\u{2248}', '\u{0}']),
    ("apE;", ['\u{2a70}', '\u{0}']),
    ("apacir;", ['\u{2a6f}', '\u{0}']),
    ("ape;", ['\u{224a}', '\u{0}']),
    ("apid;", ['\u{224b}', '\u{0}']),
    ("apos;", ['\u{27}', '\u{0}']),
    ("approx;", ['\u{2248}', '\u{0}']),
    ("approxeq;", ['\u{224a}', '\u{0}']),
    ("aring", ['\u{e5}', '\u{0}']),
    ("aring;", ['\u{e5}', '\u{0}']),
    ("ascr;", ['\u{1d4b6}', '\u{0}']),
    ("ast;", ['\u{2a}', '\u{0}']),
    ("asymp;", ['\u{2248}', '\u{0}']),
    ("asympeq;", ['\u{224d}', '\u{0}']),
    ("atilde", ['\u{e3}', '\u{0}']),
    ("atilde;", ['\u{e3}', '\u{0}']),
    ("auml", ['\u{e4}', '\u{0}']),
    ("auml;", ['\u{e4}', '\u{0}']),
    ("awconint;", ['\u{2233}', '\u{0}']),
    ("awint;", ['\u{2a11}', '\u{0}']),
    ("bNot;", ['\u{2aed}', '\u{0}']),
    ("backcong;", ['\u{224c}', '\u{0}']),
    ("backepsilon;", ['\u{3f6}', '\u{0}']),
    ("backprime;", ['\u{2035}', '\u{0}']),
    ("backsim;", ['\u{223d}', '\u{0}']),
    ("backsimeq;", ['\u{22cd}', '\u{0}']),
    ("barvee;", ['\u{22bd}', '\u{0}']),
    ("barwed;", ['\u{2305}', '\u{0}']),
    ("barwedge;", ['\u{2305}', '\u{0}']),
    ("bbrk;", ['\u{23b5}', '\u{0}']),
    ("bbrktbrk;", ['\u{23b6}', '\u{0}']),
    ("bcong;", ['\u{224c}', '\u{0}']),
    ("bcy;", ['\u{431}', '\u{0}']),
    ("bdquo;", ['\u{201e}', '\u{0}']),
    ("becaus;", ['\u{2235}', '\u{0}']),
    ("because;", ['\u{2235}', '\u{0}']),
    ("bemptyv;", ['\u{29b0}', '\u{0}']),
    ("bepsi;", ['\u{3f6}', '\u{0}']),
    ("bernou;", ['\u{212c}', '\u{0}']),
    ("beta;", ['\u{3b2}', '\u{0}']),
    ("beth;", ['\u{2136}', '\u{0}']),
    ("between;", ['\u{226c}', '\u{0}']),
    ("bfr;", ['\u{1d51f}', '\u{0}']),
    ("bigcap;", ['\u{22c2}', '\u{0}']),
    ("bigcirc;", ['\u{25ef}', '\u{0}']),
    ("bigcup;", ['\u{22c3}', '\u{0}']),
    ("bigodot;", ['\u{2a00}', '\u{0}']),
    ("bigoplus;", ['\u{2a01}', '\u{0}']),
    ("bigotimes;", ['\u{2a02}', '\u{0}']),
    ("bigsqcup;", ['\u{2a06}', '\u{0}']),
    ("bigstar;", ['\u{2605}', '\u{0}']),
    ("bigtriangledown;", ['\u{25bd}', '\u{0}']),
    ("bigtriangleup;", ['\u{25b3}', '\u{0}']),
    ("biguplus;", ['\u{2a04}', '\u{0}']),
    ("bigvee;", ['\u{22c1}', '\u{0}']),
    ("bigwedge;", ['\u{22c0}', '\u{0}']),
    ("bkarow;", ['\u{290d}', '\u{0}']),
    ("blacklozenge;", ['\u{29eb}', '\u{0}']),
    ("blacksquare;", ['\u{25aa}', '\u{0}']),
    ("blacktriangle;", ['\u{25b4}', '\u{0}']),
    ("blacktriangledown;", ['\u{25be}', '\u{0}']),
    ("blacktriangleleft;", ['\u{25c2}', '\u{0}']),
    ("blacktriangleright;", ['\u{25b8}', '\u{0}']),
    ("blank;", ['\u{2423}', '\u{0}']),
    ("blk12;", ['\u{2592}', '\u{0}']),
    ("blk14;", ['\u{2591}', '\u{0}']),
    ("blk34;", ['\u{2593}', '\u{0}']),
    ("block;", ['\u{2588}', '\u{0}']),
    ("bne;", ['\u{3d}', '\u{20e5}']),
    ("bnequiv;", ['\u{2261}', '\u{20e5}']),
    ("bnot;", ['\u{2310}', '\u{0}']),
    ("bopf;", ['\u{1d553}', '\u{0}']),
    ("bot;", ['\u{22a5}', '\u{0}']),
    ("bottom;", ['\u{22a5}', '\u{0}']),
    ("bowtie;", ['\u{22c8}', '\u{0}']),
    ("boxDL;", ['\u{2557}', '\u{0}']),
    ("boxDR;", ['\u{2554}', '\u{0}']),
    ("boxDl;", ['\u{2556}', '\u{0}']),
    ("boxDr;", ['\u{2553}', '\u{0}']),
    ("boxH;", ['\u{2550}', '\u{0}']),
    ("boxHD;", ['\u{2566}', '\u{0}']),
    ("boxHU;", ['\u{2569}', '\u{0}']),
    ("boxHd;", ['\u{2564}', '\u{0}']),
    ("boxHu;", ['\u{2567}', '\u{0}']),
    ("boxUL;", ['\u{255d}', '\u{0}']),
    ("boxUR;", ['\u{255a}', '\u{0}']),
    ("boxUl;", ['\u{255c}', '\u{0}']),
    ("boxUr;", ['\u{2559}', '\u{0}']),
    ("boxV;", ['\u{2551}', '\u{0}']),
    ("boxVH;", ['\u{256c}', '\u{0}']),
    ("boxVL;", ['\u{2563}', '\u{0}']),
    ("boxVR;", ['\u{2560}', '\u{0}']),
    ("boxVh;", ['\u{256b}', '\u{0}']),
    ("boxVl;", ['\u{2562}', '\u{0}']),
    ("boxVr;", ['\u{255f}', '\u{0}']),
    ("boxbox;", ['\u{29c9}', '\u{0}']),
    ("boxdL;", ['\u{2555}', '\u{0}']),
    ("boxdR;", ['\u{2552}', '\u{0}']),
    ("boxdl;", ['\u{2510}', '\u{0}']),
    ("boxdr;", ['\u{250c}', '\u{0}']),
    ("boxh;", ['\u{2500}', '\u{0}']),
    ("boxhD;", ['\u{2565}', '\u{0}']),
    ("boxhU;", ['\u{2568}', '\u{0}']),
    ("boxhd;", ['\u{252c}', '\u{0}']),
    ("boxhu;", ['\u{2534}', '\u{0}']),
    ("boxminus;", ['\u{229f}', '\u{0}']),
    ("boxplus;", ['\u{229e}', '\u{0}']),
    ("boxtimes;", ['\u{22a0}', '\u{0}']),
    ("boxuL;", ['\u{255b}', '\u{0}']),
    ("boxuR;", ['\u{2558}', '\u{0}']),
    ("boxul;", ['\u{2518}', '\u{0}']),
    ("boxur;", ['\u{2514}', '\u{0}']),
    ("boxv;", ['\u{2502}', '\u{0}']),
    ("boxvH;", ['\u{256a}', '\u{0}']),
    ("boxvL;", ['\u{2561}', '\u{0}']),
    ("boxvR;", ['\u{255e}', '\u{0}']),
    ("boxvh;", ['\u{253c}', '\u{0}']),
    ("boxvl;", ['\u{2524}', '\u{0}']),
    ("boxvr;", ['\u{251c}', '\u{0}']),
    ("bprime;", ['\u{2035}', '\u{0}']),
    ("breve;", ['\u{2d8}', '\u{0}']),
    ("brvbar", ['\u{a6}', '\u{0}']),
    ("brvbar;", ['\u{a6}', '\u{0}']),
    ("bscr;", ['\u{1d4b7}', '\u{0}']),
    ("bsemi;", ['\u{204f}', '\u{0}']),
    ("bsim;", ['\u{223d}', '\u{0}']),
    ("bsime;", ['\u{22cd}', '\u{0}']),
    ("bsol;", ['\u{5c}', '\u{0}']),
    ("bsolb;", ['\u{29c5}', '\u{0}']),
    ("bsolhsub;", ['\u{27c8}', '\u{0}']),
    ("bull;", ['\u{2022}', '\u{0}']),
    ("bullet;", ['\u{2022}', '\u{0}']),
    ("bump;", ['\u{224e}', '\u{0}']),
    ("bumpE;", ['\u{2aae}', '\u{0}']),
    ("bumpe;", ['\u{224f}', '\u{0}']),
    ("bumpeq;", ['\u{224f}', '\u{0}']),
    ("cacute;", ['\u{107}', '\u{0}']),
    ("cap;", ['\u{2229}', '\u{0}']),
    ("capand;", ['\u{2a44}', '\u{0}']),
    ("capbrcup;", ['\u{2a49}', '\u{0}']),
    ("capcap;", ['\u{2a4b}', '\u{0}']),
    ("capcup;", ['\u{2a47}', '\u{0}']),
    ("capdot;", ['\u{2a40}', '\u{0}']),
    ("caps;", ['\u{2229}', '\u{fe00}']),
    ("caret;", ['\u{2041}', '\u{0}']),
    ("caron;", ['\u{2c7}', '\u{0}']),
    ("ccaps;", ['\u{2a4d}', '\u{0}']),
    ("ccaron;", ['\u{10d}', '\u{0}']),
    ("ccedil", ['\u{e7}', '\u{0}']),
    ("ccedil;", ['\u{e7}', '\u{0}']),
    ("ccirc;", ['\u{109}', '\u{0}']),
    ("ccups;", ['\u{2a4c}', '\u{0}']),
    ("ccupssm;", ['\u{2a50}', '\u{0}']),
    ("cdot;", ['\u{10b}', '\u{0}']),
    ("cedil", ['\u{b8}', '\u{0}']),
    ("cedil;", ['\u{b8}', '\u{0}']),
    ("cemptyv;", ['\u{29b2}', '\u{0}']),
    ("cent", ['\u{a2}', '\u{0}']),
    ("cent;", ['\u{a2}', '\u{0}']),
    ("centerdot;", ['\u{b7}', '\u{0}']),
    ("cfr;", ['\u{1d520}', '\u{0}']),
    ("chcy;", ['\u{447}', '\u{0}']),
    ("check;", ['\u{2713}', '\u{0}']),
    ("checkmark;", ['\u{2713}', '\u{0}']),
    ("chi;", ['\u{3c7}', '\u{0}']),
    ("cir;", ['\u{25cb}', '\u{0}']),
    ("cirE;", ['\u{29c3}', '\u{0}']),
    ("circ;", ['\u{2c6}', '\u{0}']),
    ("circeq;", ['\u{2257}', '\u{0}']),
    ("circlearrowleft;", ['\u{21ba}', '\u{0}']),
    ("circlearrowright;", ['\u{21bb}', '\u{0}']),
    ("circledR;", ['\u{ae}', '\u{0}']),
    ("circledS;", ['\u{24c8}', '\u{0}']),
    ("circledast;", ['\u{229b}', '\u{0}']),
    ("circledcirc;", ['\u{229a}', '\u{0}']),
    ("circleddash;", ['\u{229d}', '\u{0}']),
    ("cire;", ['\u{2257}', '\u{0}']),
    ("cirfnint;", ['\u{2a10}', '\u{0}']),
    ("cirmid;", ['\u{2aef}', '\u{0}']),
    ("cirscir;", ['\u{29c2}', '\u{0}']),
    ("clubs;", ['\u{2663}', '\u{0}']),
    ("clubsuit;", ['\u{2663}', '\u{0}']),
    ("colon;", ['\u{3a}', '\u{0}']),
    ("colone;", ['\u{2254}', '\u{0}']),
    ("coloneq;", ['\u{2254}', '\u{0}']),
    ("comma;", ['\u{2c}', '\u{0}']),
    ("commat;", ['\u{40}', '\u{0}']),
    ("comp;", ['\u{2201}', '\u{0}']),
    ("compfn;", ['\u{2218}', '\u{0}']),
    ("complement;", ['\u{2201}', '\u{0}']),
    ("complexes;", ['\u{2102}', '\u{0}']),
    ("cong;", ['\u{2245}', '\u{0}']),
    ("congdot;", ['\u{2a6d}', '\u{0}']),
    ("conint;", ['\u{222e}', '\u{0}']),
    ("copf;", ['\u{1d554}', '\u{0}']),
    ("coprod;", ['\u{2210}', '\u{0}']),
    ("copy", ['\u{a9}', '\u{0}']),
    ("copy;", ['\u{a9}', '\u{0}']),
    ("copysr;", ['\u{2117}', '\u{0}']),
    ("crarr;", ['\u{21b5}', '\u{0}']),
    ("cross;", ['\u{2717}', '\u{0}']),
    ("cscr;", ['\u{1d4b8}', '\u{0}']),
    ("csub;", ['\u{2acf}', '\u{0}']),
    ("csube;", ['\u{2ad1}', '\u{0}']),
    ("csup;", ['\u{2ad0}', '\u{0}']),
    ("csupe;", ['\u{2ad2}', '\u{0}']),
    ("ctdot;", ['\u{22ef}', '\u{0}']),
    ("cudarrl;", ['\u{2938}', '\u{0}']),
    ("cudarrr;", ['\u{2935}', '\u{0}']),
    ("cuepr;", ['\u{22de}', '\u{0}']),
    ("cuesc;", ['\u{22df}', '\u{0}']),
    ("cularr;", ['\u{21b6}', '\u{0}']),
    ("cularrp;", ['\u{293d}', '\u{0}']),
    ("cup;", ['\u{222a}', '\u{0}']),
    ("cupbrcap;", ['\u{2a48}', '\u{0}']),
    ("cupcap;", ['\u{2a46}', '\u{0}']),
    ("cupcup;", ['\u{2a4a}', '\u{0}']),
    ("cupdot;", ['\u{228d}', '\u{0}']),
    ("cupor;", ['\u{2a45}', '\u{0}']),
    ("cups;", ['\u{222a}', '\u{fe00}']),
    ("curarr;", ['\u{21b7}', '\u{0}']),
    ("curarrm;", ['\u{293c}', '\u{0}']),
    ("curlyeqprec;", ['\u{22de}', '\u{0}']),
    ("curlyeqsucc;", ['\u{22df}', '\u{0}']),
    ("curlyvee;", ['\u{22ce}', '\u{0}']),
    ("curlywedge;", ['\u{22cf}', '\u{0}']),
    ("curren", ['\u{a4}', '\u{0}']),
    ("curren;", ['\u{a4}', '\u{0}']),
    ("curvearrowleft;", ['\u{21b6}', '\u{0}']),
    ("curvearrowright;", ['\u{21b7}', '\u{0}']),
    ("cuvee;", ['\u{22ce}', '\u{0}']),
    ("cuwed;", ['\u{22cf}', '\u{0}']),
    ("cwconint;", ['\u{2232}', '\u{0}']),
    ("cwint;", ['\u{2231}', '\u{0}']),
    ("cylcty;", ['\u{232d}', '\u{0}']),
    ("dArr;", ['\u{21d3}', '\u{0}']),
    ("dHar;", ['\u{2965}', '\u{0}']),
    ("dagger;", ['\u{2020}', '\u{0}']),
    ("daleth;", ['\u{2138}', '\u{0}']),
    ("darr;", ['\u{2193}', '\u{0}']),
    ("dash;", ['\u{2010}', '\u{0}']),
    ("dashv;", ['\u{22a3}', '\u{0}']),
    ("dbkarow;", ['\u{290f}', '\u{0}']),
    ("dblac;", ['\u{2dd}', '\u{0}']),
    ("dcaron;", ['\u{10f}', '\u{0}']),
    ("dcy;", ['\u{434}', '\u{0}']),
    ("dd;", ['\u{2146}', '\u{0}']),
    ("ddagger;", ['\u{2021}', '\u{0}']),
    ("ddarr;", ['\u{21ca}', '\u{0}']),
    ("ddotseq;", ['\u{2a77}', '\u{0}']),
    ("deg", ['\u{b0}', '\u{0}']),
    ("deg;", ['\u{b0}', '\u{0}']),
    ("delta;", ['\u{3b4}', '\u{0}']),
    ("demptyv;", ['\u{29b1}', '\u{0}']),
    ("dfisht;", ['\u{297f}', '\u{0}']),
    ("dfr;", ['\u{1d521}', '\u{0}']),
    ("dharl;", ['\u{21c3}', '\u{0}']),
    ("dharr;", ['\u{21c2}', '\u{0}']),
    ("diam;", ['\u{22c4}', '\u{0}']),
    ("diamond;", ['\u{22c4}', '\u{0}']),
    ("diamondsuit;", ['\u{2666}', '\u{0}']),
    ("diams;", ['\u{2666}', '\u{0}']),
    ("die;", ['\u{a8}', '\u{0}']),
    ("digamma;", ['\u{3dd}', '\u{0}']),
    ("disin;", ['\u{22f2}', '\u{0}']),
    ("div;", ['\u{f7}', '\u{0}']),
    ("divide", ['\u{f7}', '\u{0}']),
    ("divide;", ['\u{f7}', '\u{0}']),
    ("divideontimes;", ['\u{22c7}', '\u{0}']),
    ("divonx;", ['\u{22c7}', '\u{0}']),
    ("djcy;", ['\u{452}', '\u{0}']),
    ("dlcorn;", ['\u{231e}', '\u{0}']),
    ("dlcrop;", ['\u{230d}', '\u{0}']),
    ("dollar;", ['\u{24}', '\u{0}']),
    ("dopf;", ['\u{1d555}', '\u{0}']),
    ("dot;", ['\u{2d9}', '\u{0}']),
    ("doteq;", ['\u{2250}', '\u{0}']),
    ("doteqdot;", ['\u{2251}', '\u{0}']),
    ("dotminus;", ['\u{2238}', '\u{0}']),
    ("dotplus;", ['\u{2214}', '\u{0}']),
    ("dotsquare;", ['\u{22a1}', '\u{0}']),
    ("doublebarwedge;", ['\u{2306}', '\u{0}']),
    ("downarrow;", ['\u{2193}', '\u{0}']),
    ("downdownarrows;", ['\u{21ca}', '\u{0}']),
    ("downharpoonleft;", ['\u{21c3}', '\u{0}']),
    ("downharpoonright;", ['\u{21c2}', '\u{0}']),
    ("drbkarow;", ['\u{2910}', '\u{0}']),
    ("drcorn;", ['\u{231f}', '\u{0}']),
    ("drcrop;", ['\u{230c}', '\u{0}']),
    ("dscr;", ['\u{1d4b9}', '\u{0}']),
    ("dscy;", ['\u{455}', '\u{0}']),
    ("dsol;", ['\u{29f6}', '\u{0}']),
    ("dstrok;", ['\u{111}', '\u{0}']),
    ("dtdot;", ['\u{22f1}', '\u{0}']),
    ("dtri;", ['\u{25bf}', '\u{0}']),
    ("dtrif;", ['\u{25be}', '\u{0}']),
    ("duarr;", ['\u{21f5}', '\u{0}']),
    ("duhar;", ['\u{296f}', '\u{0}']),
    ("dwangle;", ['\u{29a6}', '\u{0}']),
    ("dzcy;", ['\u{45f}', '\u{0}']),
    ("dzigrarr;", ['\u{27ff}', '\u{0}']),
    ("eDDot;", ['\u{2a77}', '\u{0}']),
    ("eDot;", ['\u{2251}', '\u{0}']),
    ("eacute", ['\u{e9}', '\u{0}']),
    ("eacute;", ['\u{e9}', '\u{0}']),
    ("easter;", ['\u{2a6e}', '\u{0}']),
    ("ecaron;", ['\u{11b}', '\u{0}']),
    ("ecir;", ['\u{2256}', '\u{0}']),
    ("ecirc", ['\u{ea}', '\u{0}']),
    ("ecirc;", ['\u{ea}', '\u{0}']),
    ("ecolon;", ['\u{2255}', '\u{0}']),
    ("ecy;", ['\u{44d}', '\u{0}']),
    ("edot;", ['\u{117}', '\u{0}']),
    ("ee;", ['\u{2147}', '\u{0}']),
    ("efDot;", ['\u{2252}', '\u{0}']),
    ("efr;", ['\u{1d522}', '\u{0}']),
    ("eg;", ['\u{2a9a}', '\u{0}']),
    ("egrave", ['\u{e8}', '\u{0}']),
    ("egrave;", ['\u{e8}', '\u{0}']),
    ("egs;", ['\u{2a96}', '\u{0}']),
    ("egsdot;", ['\u{2a98}', '\u{0}']),
    ("el;", ['\u{2a99}', '\u{0}']),
    ("elinters;", ['\u{23e7}', '\u{0}']),
    ("ell;", ['\u{2113}', '\u{0}']),
    ("els;", ['\u{2a95}', '\u{0}']),
    ("elsdot;", ['\u{2a97}', '\u{0}']),
    ("emacr;", ['\u{113}', '\u{0}']),
    ("empty;", ['\u{2205}', '\u{0}']),
    ("emptyset;", ['\u{2205}', '\u{0}']),
    ("emptyv;", ['\u{2205}', '\u{0}']),
    ("emsp13;", ['\u{2004}', '\u{0}']),
    ("emsp14;", ['\u{2005}', '\u{0}']),
    ("emsp;", ['\u{2003}', '\u{0}']),
    ("eng;", ['\u{14b}', '\u{0}']),
    ("ensp;", ['\u{2002}', '\u{0}']),
    ("eogon;", ['\u{119}', '\u{0}']),
    ("eopf;", ['\u{1d556}', '\u{0}']),
    ("epar;", ['\u{22d5}', '\u{0}']),
    ("eparsl;", ['\u{29e3}', '\u{0}']),
    ("eplus;", ['\u{2a71}', '\u{0}']),
    ("epsi;", ['\u{3b5}', '\u{0}']),
    ("epsilon;", ['\u{3b5}', '\u{0}']),
    ("epsiv;", ['\u{3f5}', '\u{0}']),
    ("eqcirc;", ['\u{2256}', '\u{0}']),
    ("eqcolon;", ['\u{2255}', '\u{0}']),
    ("eqsim;", ['\u{2242}', '\u{0}']),
    ("eqslantgtr;", ['\u{2a96}', '\u{0}']),
    ("eqslantless;", ['\u{2a95}', '\u{0}']),
    ("equals;", ['\u{3d}', '\u{0}']),
    ("equest;", ['\u{225f}', '\u{0}']),
    ("equiv;", ['\u{2261}', '\u{0}']),
    ("equivDD;", ['\u{2a78}', '\u{0}']),
    ("eqvparsl;", ['\u{29e5}', '\u{0}']),
    ("erDot;", ['\u{2253}', '\u{0}']),
    ("erarr;", ['\u{2971}', '\u{0}']),
    ("escr;", ['\u{212f}', '\u{0}']),
    ("esdot;", ['\u{2250}', '\u{0}']),
    ("esim;", ['\u{2242}', '\u{0}']),
    ("eta;", ['\u{3b7}', '\u{0}']),
    ("eth", ['\u{f0}', '\u{0}']),
    ("eth;", ['\u{f0}', '\u{0}']),
    ("euml", ['\u{eb}', '\u{0}']),
    ("euml;", ['\u{eb}', '\u{0}']),
    ("euro;", ['\u{20ac}', '\u{0}']),
    ("excl;", ['\u{21}', '\u{0}']),
    ("exist;", ['\u{2203}', '\u{0}']),
    ("expectation;", ['\u{2130}', '\u{0}']),
    ("exponentiale;", ['\u{2147}', '\u{0}']),
    ("fallingdotseq;", ['\u{2252}', '\u{0}']),
    ("fcy;", ['\u{444}', '\u{0}']),
    ("female;", ['\u{2640}', '\u{0}']),
    ("ffilig;", ['\u{fb03}', '\u{0}']),
    ("fflig;", ['\u{fb00}', '\u{0}']),
    ("ffllig;", ['\u{fb04}', '\u{0}']),
    ("ffr;", ['\u{1d523}', '\u{0}']),
    ("filig;", ['\u{fb01}', '\u{0}']),
    ("fjlig;", ['\u{66}', '\u{6a}']),
    ("flat;", ['\u{266d}', '\u{0}']),
    ("fllig;", ['\u{fb02}', '\u{0}']),
    ("fltns;", ['\u{25b1}', '\u{0}']),
    ("fnof;", ['\u{192}', '\u{0}']),
    ("fopf;", ['\u{1d557}', '\u{0}']),
    ("forall;", ['\u{2200}', '\u{0}']),
    ("fork;", ['\u{22d4}', '\u{0}']),
    ("forkv;", ['\u{2ad9}', '\u{0}']),
    ("fpartint;", ['\u{2a0d}', '\u{0}']),
    ("frac12", ['\u{bd}', '\u{0}']),
    ("frac12;", ['\u{bd}', '\u{0}']),
    ("frac13;", ['\u{2153}', '\u{0}']),
    ("frac14", ['\u{bc}', '\u{0}']),
    ("frac14;", ['\u{bc}', '\u{0}']),
    ("frac15;", ['\u{2155}', '\u{0}']),
    ("frac16;", ['\u{2159}', '\u{0}']),
    ("frac18;", ['\u{215b}', '\u{0}']),
    ("frac23;", ['\u{2154}', '\u{0}']),
    ("frac25;", ['\u{2156}', '\u{0}']),
    ("frac34", ['\u{be}', '\u{0}']),
    ("frac34;", ['\u{be}', '\u{0}']),
    ("frac35;", ['\u{2157}', '\u{0}']),
    ("frac38;", ['\u{215c}', '\u{0}']),
    ("frac45;", ['\u{2158}', '\u{0}']),
    ("frac56;", ['\u{215a}', '\u{0}']),
    ("frac58;", ['\u{215d}', '\u{0}']),
    ("frac78;", ['\u{215e}', '\u{0}']),
    ("frasl;", ['\u{2044}', '\u{0}']),
    ("frown;", ['\u{2322}', '\u{0}']),
    ("fscr;", ['\u{1d4bb}', '\u{0}']),
    ("gE;", ['\u{2267}', '\u{0}']),
    ("gEl;", ['\u{2a8c}', '\u{0}']),
    ("gacute;", ['\u{1f5}', '\u{0}']),
    ("gamma;", ['\u{3b3}', '\u{0}']),
    ("gammad;", ['\u{3dd}', '\u{0}']),
    ("gap;", ['\u{2a86}', '\u{0}']),
    ("gbreve;", ['\u{11f}', '\u{0}']),
    ("gcirc;", ['\u{11d}', '\u{0}']),
    ("gcy;", ['\u{433}', '\u{0}']),
    ("gdot;", ['\u{121}', '\u{0}']),
    ("ge;", ['\u{2265}', '\u{0}']),
    ("gel;", ['\u{22db}', '\u{0}']),
    ("geq;", ['\u{2265}', '\u{0}']),
    ("geqq;", ['\u{2267}', '\u{0}']),
    ("geqslant;", ['\u{2a7e}', '\u{0}']),
    ("ges;", ['\u{2a7e}', '\u{0}']),
    ("gescc;", ['\u{2aa9}', '\u{0}']),
    ("gesdot;", ['\u{2a80}', '\u{0}']),
    ("gesdoto;", ['\u{2a82}', '\u{0}']),
    ("gesdotol;", ['\u{2a84}', '\u{0}']),
    ("gesl;", ['\u{22db}', '\u{fe00}']),
    ("gesles;", ['\u{2a94}', '\u{0}']),
    ("gfr;", ['\u{1d524}', '\u{0}']),
    ("gg;", ['\u{226b}', '\u{0}']),
    ("ggg;", ['\u{22d9}', '\u{0}']),
    ("gimel;", ['\u{2137}', '\u{0}']),
    ("gjcy;", ['\u{453}', '\u{0}']),
    ("gl;", ['\u{2277}', '\u{0}']),
    ("glE;", ['\u{2a92}', '\u{0}']),
    ("gla;", ['\u{2aa5}', '\u{0}']),
    ("glj;", ['\u{2aa4}', '\u{0}']),
    ("gnE;", ['\u{2269}', '\u{0}']),
    ("gnap;", ['\u{2a8a}', '\u{0}']),
    ("gnapprox;", ['\u{2a8a}', '\u{0}']),
    ("gne;", ['\u{2a88}', '\u{0}']),
    ("gneq;", ['\u{2a88}', '\u{0}']),
    ("gneqq;", ['\u{2269}', '\u{0}']),
    ("gnsim;", ['\u{22e7}', '\u{0}']),
    ("gopf;", ['\u{1d558}', '\u{0}']),
    ("grave;", ['\u{60}', '\u{0}']),
    ("gscr;", ['\u{210a}', '\u{0}']),
    ("gsim;", ['\u{2273}', '\u{0}']),
    ("gsime;", ['\u{2a8e}', '\u{0}']),
    ("gsiml;", ['\u{2a90}', '\u{0}']),
    ("gt", ['\u{3e}', '\u{0}']),
    ("gt;", ['\u{3e}', '\u{0}']),
    ("gtcc;", ['\u{2aa7}', '\u{0}']),
    ("gtcir;", ['\u{2a7a}', '\u{0}']),
    ("gtdot;", ['\u{22d7}', '\u{0}']),
    ("gtlPar;", ['\u{2995}', '\u{0}']),
    ("gtquest;", ['\u{2a7c}', '\u{0}']),
    ("gtrapprox;", ['\u{2a86}', '\u{0}']),
    ("gtrarr;", ['\u{2978}', '\u{0}']),
    ("gtrdot;", ['\u{22d7}', '\u{0}']),
    ("gtreqless;", ['\u{22db}', '\u{0}']),
    ("gtreqqless;", ['\u{2a8c}', '\u{0}']),
    ("gtrless;", ['\u{2277}', '\u{0}']),
    ("gtrsim;", ['\u{2273}', '\u{0}']),
    ("gvertneqq;", ['\u{2269}', '\u{fe00}']),
    ("gvnE;", ['\u{2269}', '\u{fe00}']),
    ("hArr;", ['\u{21d4}', '\u{0}']),
    ("hairsp;", ['\u{200a}', '\u{0}']),
    ("half;", ['\u{bd}', '\u{0}']),
    ("hamilt;", ['\u{210b}', '\u{0}']),
    ("hardcy;", ['\u{44a}', '\u{0}']),
    ("harr;", ['\u{2194}', '\u{0}']),
    ("harrcir;", ['\u{2948}', '\u{0}']),
    ("harrw;", ['\u{21ad}', '\u{0}']),
    ("hbar;", ['\u{210f}', '\u{0}']),
    ("hcirc;", ['\u{125}', '\u{0}']),
    ("hearts;", ['\u{2665}', '\u{0}']),
    ("heartsuit;", ['\u{2665}', '\u{0}']),
    ("hellip;", ['\u{2026}', '\u{0}']),
    ("hercon;", ['\u{22b9}', '\u{0}']),
    ("hfr;", ['\u{1d525}', '\u{0}']),
    ("hksearow;", ['\u{2925}', '\u{0}']),
    ("hkswarow;", ['\u{2926}', '\u{0}']),
    ("hoarr;", ['\u{21ff}', '\u{0}']),
    ("homtht;", ['\u{223b}', '\u{0}']),
    ("hookleftarrow;", ['\u{21a9}', '\u{0}']),
    ("hookrightarrow;", ['\u{21aa}', '\u{0}']),
    ("hopf;", ['\u{1d559}', '\u{0}']),
    ("horbar;", ['\u{2015}', '\u{0}']),
    ("hscr;", ['\u{1d4bd}', '\u{0}']),
    ("hslash;", ['\u{210f}', '\u{0}']),
    ("hstrok;", ['\u{127}', '\u{0}']),
    ("hybull;", ['\u{2043}', '\u{0}']),
    ("hyphen;", ['\u{2010}', '\u{0}']),
    ("iacute", ['\u{ed}', '\u{0}']),
    ("iacute;", ['\u{ed}', '\u{0}']),
    ("ic;", ['\u{2063}', '\u{0}']),
    ("icirc", ['\u{ee}', '\u{0}']),
    ("icirc;", ['\u{ee}', '\u{0}']),
    ("icy;", ['\u{438}', '\u{0}']),
    ("iecy;", ['\u{435}', '\u{0}']),
    ("iexcl", ['\u{a1}', '\u{0}']),
    ("iexcl;", ['\u{a1}', '\u{0}']),
    ("iff;", ['\u{21d4}', '\u{0}']),
    ("ifr;", ['\u{1d526}', '\u{0}']),
    ("igrave", ['\u{ec}', '\u{0}']),
    ("igrave;", ['\u{ec}', '\u{0}']),
    ("ii;", ['\u{2148}', '\u{0}']),
    ("iiiint;", ['\u{2a0c}', '\u{0}']),
    ("iiint;", ['\u{222d}', '\u{0}']),
    ("iinfin;", ['\u{29dc}', '\u{0}']),
    ("iiota;", ['\u{2129}', '\u{0}']),
    ("ijlig;", ['\u{133}', '\u{0}']),
    ("imacr;", ['\u{12b}', '\u{0}']),
    ("image;", ['\u{2111}', '\u{0}']),
    ("imagline;", ['\u{2110}', '\u{0}']),
    ("imagpart;", ['\u{2111}', '\u{0}']),
    ("imath;", ['\u{131}', '\u{0}']),
    ("imof;", ['\u{22b7}', '\u{0}']),
    ("imped;", ['\u{1b5}', '\u{0}']),
    ("in;", ['\u{2208}', '\u{0}']),
    ("incare;", ['\u{2105}', '\u{0}']),
    ("infin;", ['\u{221e}', '\u{0}']),
    ("infintie;", ['\u{29dd}', '\u{0}']),
    ("inodot;", ['\u{131}', '\u{0}']),
    ("int;", ['\u{222b}', '\u{0}']),
    ("intcal;", ['\u{22ba}', '\u{0}']),
    ("integers;", ['\u{2124}', '\u{0}']),
    ("intercal;", ['\u{22ba}', '\u{0}']),
    ("intlarhk;", ['\u{2a17}', '\u{0}']),
    ("intprod;", ['\u{2a3c}', '\u{0}']),
    ("iocy;", ['\u{451}', '\u{0}']),
    ("iogon;", ['\u{12f}', '\u{0}']),
    ("iopf;", ['\u{1d55a}', '\u{0}']),
    ("iota;", ['\u{3b9}', '\u{0}']),
    ("iprod;", ['\u{2a3c}', '\u{0}']),
    ("iquest", ['\u{bf}', '\u{0}']),
    ("iquest;", ['\u{bf}', '\u{0}']),
    ("iscr;", ['\u{1d4be}', '\u{0}']),
    ("isin;", ['\u{2208}', '\u{0}']),
    ("isinE;", ['\u{22f9}', '\u{0}']),
    ("isindot;", ['\u{22f5}', '\u{0}']),
    ("isins;", ['\u{22f4}', '\u{0}']),
    ("isinsv;", ['\u{22f3}', '\u{0}']),
    ("isinv;", ['\u{2208}', '\u{0}']),
    ("it;", ['\u{2062}', '\u{0}']),
    ("itilde;", ['\u{129}', '\u{0}']),
    ("iukcy;", ['\u{456}', '\u{0}']),
    ("iuml", ['\u{ef}', '\u{0}']),
    ("iuml;", ['\u{ef}', '\u{0}']),
    ("jcirc;", ['\u{135}', '\u{0}']),
    ("jcy;", ['\u{439}', '\u{0}']),
    ("jfr;", ['\u{1d527}', '\u{0}']),
    ("jmath;", ['\u{237}', '\u{0}']),
    ("jopf;", ['\u{1d55b}', '\u{0}']),
    ("jscr;", ['\u{1d4bf}', '\u{0}']),
    ("jsercy;", ['\u{458}', '\u{0}']),
    ("jukcy;", ['\u{454}', '\u{0}']),
    ("kappa;", ['\u{3ba}', '\u{0}']),
    ("kappav;", ['\u{3f0}', '\u{0}']),
    ("kcedil;", ['\u{137}', '\u{0}']),
    ("kcy;", ['\u{43a}', '\u{0}']),
    ("kfr;", ['\u{1d528}', '\u{0}']),
    ("kgreen;", ['\u{138}', '\u{0}']),
    ("khcy;", ['\u{445}', '\u{0}']),
    ("kjcy;", ['\u{45c}', '\u{0}']),
    ("kopf;", ['\u{1d55c}', '\u{0}']),
    ("kscr;", ['\u{1d4c0}', '\u{0}']),
    ("lAarr;", ['\u{21da}', '\u{0}']),
    ("lArr;", ['\u{21d0}', '\u{0}']),
    ("lAtail;", ['\u{291b}', '\u{0}']),
    ("lBarr;", ['\u{290e}', '\u{0}']),
    ("lE;", ['\u{2266}', '\u{0}']),
    ("lEg;", ['\u{2a8b}', '\u{0}']),
    ("lHar;", ['\u{2962}', '\u{0}']),
    ("lacute;", ['\u{13a}', '\u{0}']),
    ("laemptyv;", ['\u{29b4}', '\u{0}']),
    ("lagran;", ['\u{2112}', '\u{0}']),
    ("lambda;", ['\u{3bb}', '\u{0}']),
    ("lang;", ['\u{27e8}', '\u{0}']),
    ("langd;", ['\u{2991}', '\u{0}']),
    ("langle;", ['\u{27e8}', '\u{0}']),
    ("lap;", ['\u{2a85}', '\u{0}']),
    ("laquo", ['\u{ab}', '\u{0}']),
    ("laquo;", ['\u{ab}', '\u{0}']),
    ("larr;", ['\u{2190}', '\u{0}']),
    ("larrb;", ['\u{21e4}', '\u{0}']),
    ("larrbfs;", ['\u{291f}', '\u{0}']),
    ("larrfs;", ['\u{291d}', '\u{0}']),
    ("larrhk;", ['\u{21a9}', '\u{0}']),
    ("larrlp;", ['\u{21ab}', '\u{0}']),
    ("larrpl;", ['\u{2939}', '\u{0}']),
    ("larrsim;", ['\u{2973}', '\u{0}']),
    ("larrtl;", ['\u{21a2}', '\u{0}']),
    ("lat;", ['\u{2aab}', '\u{0}']),
    ("latail;", ['\u{2919}', '\u{0}']),
    ("late;", ['\u{2aad}', '\u{0}']),
    ("lates;", ['\u{2aad}', '\u{fe00}']),
    ("lbarr;", ['\u{290c}', '\u{0}']),
    ("lbbrk;", ['\u{2772}', '\u{0}']),
    ("lbrace;", ['\u{7b}', '\u{0}']),
    ("lbrack;", ['\u{5b}', '\u{0}']),
    ("lbrke;", ['\u{298b}', '\u{0}']),
    ("lbrksld;", ['\u{298f}', '\u{0}']),
    ("lbrkslu;", ['\u{298d}', '\u{0}']),
    ("lcaron;", ['\u{13e}', '\u{0}']),
    ("lcedil;", ['\u{13c}', '\u{0}']),
    ("lceil;", ['\u{2308}', '\u{0}']),
    ("lcub;", ['\u{7b}', '\u{0}']),
    ("lcy;", ['\u{43b}', '\u{0}']),
    ("ldca;", ['\u{2936}', '\u{0}']),
    ("ldquo;", ['\u{201c}', '\u{0}']),
    ("ldquor;", ['\u{201e}', '\u{0}']),
    ("ldrdhar;", ['\u{2967}', '\u{0}']),
    ("ldrushar;", ['\u{294b}', '\u{0}']),
    ("ldsh;", ['\u{21b2}', '\u{0}']),
    ("le;", ['\u{2264}', '\u{0}']),
    ("leftarrow;", ['\u{2190}', '\u{0}']),
    ("leftarrowtail;", ['\u{21a2}', '\u{0}']),
    ("leftharpoondown;", ['\u{21bd}', '\u{0}']),
    ("leftharpoonup;", ['\u{21bc}', '\u{0}']),
    ("leftleftarrows;", ['\u{21c7}', '\u{0}']),
    ("leftrightarrow;", ['\u{2194}', '\u{0}']),
    ("leftrightarrows;", ['\u{21c6}', '\u{0}']),
    ("leftrightharpoons;", ['\u{21cb}', '\u{0}']),
    ("leftrightsquigarrow;", ['\u{21ad}', '\u{0}']),
    ("leftthreetimes;", ['\u{22cb}', '\u{0}']),
    ("leg;", ['\u{22da}', '\u{0}']),
    ("leq;", ['\u{2264}', '\u{0}']),
    ("leqq;", ['\u{2266}', '\u{0}']),
    ("leqslant;", ['\u{2a7d}', '\u{0}']),
    ("les;", ['\u{2a7d}', '\u{0}']),
    ("lescc;", ['\u{2aa8}', '\u{0}']),
    ("lesdot;", ['\u{2a7f}', '\u{0}']),
    ("lesdoto;", ['\u{2a81}', '\u{0}']),
    ("lesdotor;", ['\u{2a83}', '\u{0}']),
    ("lesg;", ['\u{22da}', '\u{fe00}']),
    ("lesges;", ['\u{2a93}', '\u{0}']),
    ("lessapprox;", ['\u{2a85}', '\u{0}']),
    ("lessdot;", ['\u{22d6}', '\u{0}']),
    ("lesseqgtr;", ['\u{22da}', '\u{0}']),
    ("lesseqqgtr;", ['\u{2a8b}', '\u{0}']),
    ("lessgtr;", ['\u{2276}', '\u{0}']),
    ("lesssim;", ['\u{2272}', '\u{0}']),
    ("lfisht;", ['\u{297c}', '\u{0}']),
    ("lfloor;", ['\u{230a}', '\u{0}']),
    ("lfr;", ['\u{1d529}', '\u{0}']),
    ("lg;", ['\u{2276}', '\u{0}']),
    ("lgE;", ['\u{2a91}', '\u{0}']),
    ("lhard;", ['\u{21bd}', '\u{0}']),
    ("lharu;", ['\u{21bc}', '\u{0}']),
    ("lharul;", ['\u{296a}', '\u{0}']),
    ("lhblk;", ['\u{2584}', '\u{0}']),
    ("ljcy;", ['\u{459}', '\u{0}']),
    ("ll;", ['\u{226a}', '\u{0}']),
    ("llarr;", ['\u{21c7}', '\u{0}']),
    ("llcorner;", ['\u{231e}', '\u{0}']),
    ("llhard;", ['\u{296b}', '\u{0}']),
    ("lltri;", ['\u{25fa}', '\u{0}']),
    ("lmidot;", ['\u{140}', '\u{0}']),
    ("lmoust;", ['\u{23b0}', '\u{0}']),
    ("lmoustache;", ['\u{23b0}', '\u{0}']),
    ("lnE;", ['\u{2268}', '\u{0}']),
    ("lnap;", ['\u{2a89}', '\u{0}']),
    ("lnapprox;", ['\u{2a89}', '\u{0}']),
    ("lne;", ['\u{2a87}', '\u{0}']),
    ("lneq;", ['\u{2a87}', '\u{0}']),
    ("lneqq;", ['\u{2268}', '\u{0}']),
    ("lnsim;", ['\u{22e6}', '\u{0}']),
    ("loang;", ['\u{27ec}', '\u{0}']),
    ("loarr;", ['\u{21fd}', '\u{0}']),
    ("lobrk;", ['\u{27e6}', '\u{0}']),
    ("longleftarrow;", ['\u{27f5}', '\u{0}']),
    ("longleftrightarrow;", ['\u{27f7}', '\u{0}']),
    ("longmapsto;", ['\u{27fc}', '\u{0}']),
    ("longrightarrow;", ['\u{27f6}', '\u{0}']),
    ("looparrowleft;", ['\u{21ab}', '\u{0}']),
    ("looparrowright;", ['\u{21ac}', '\u{0}']),
    ("lopar;", ['\u{2985}', '\u{0}']),
    ("lopf;", ['\u{1d55d}', '\u{0}']),
    ("loplus;", ['\u{2a2d}', '\u{0}']),
    ("lotimes;", ['\u{2a34}', '\u{0}']),
    ("lowast;", ['\u{2217}', '\u{0}']),
    ("lowbar;", ['\u{5f}', '\u{0}']),
    ("loz;", ['\u{25ca}', '\u{0}']),
    ("lozenge;", ['\u{25ca}', '\u{0}']),
    ("lozf;", ['\u{29eb}', '\u{0}']),
    ("lpar;", ['\u{28}', '\u{0}']),
    ("lparlt;", ['\u{2993}', '\u{0}']),
    ("lrarr;", ['\u{21c6}', '\u{0}']),
    ("lrcorner;", ['\u{231f}', '\u{0}']),
    ("lrhar;", ['\u{21cb}', '\u{0}']),
    ("lrhard;", ['\u{296d}', '\u{0}']),
    ("lrm;", ['\u{200e}', '\u{0}']),
    ("lrtri;", ['\u{22bf}', '\u{0}']),
    ("lsaquo;", ['\u{2039}', '\u{0}']),
    ("lscr;", ['\u{1d4c1}', '\u{0}']),
    ("lsh;", ['\u{21b0}', '\u{0}']),
    ("lsim;", ['\u{2272}', '\u{0}']),
    ("lsime;", ['\u{2a8d}', '\u{0}']),
    ("lsimg;", ['\u{2a8f}', '\u{0}']),
    ("lsqb;", ['\u{5b}', '\u{0}']),
    ("lsquo;", ['\u{2018}', '\u{0}']),
    ("lsquor;", ['\u{201a}', '\u{0}']),
    ("lstrok;", ['\u{142}', '\u{0}']),
    ("lt", ['\u{3c}', '\u{0}']),
    ("lt;", ['\u{3c}', '\u{0}']),
    ("ltcc;", ['\u{2aa6}', '\u{0}']),
    ("ltcir;", ['\u{2a79}', '\u{0}']),
    ("ltdot;", ['\u{22d6}', '\u{0}']),
    ("lthree;", ['\u{22cb}', '\u{0}']),
    ("ltimes;", ['\u{22c9}', '\u{0}']),
    ("ltlarr;", ['\u{2976}', '\u{0}']),
    ("ltquest;", ['\u{2a7b}', '\u{0}']),
    ("ltrPar;", ['\u{2996}', '\u{0}']),
    ("ltri;", ['\u{25c3}', '\u{0}']),
    ("ltrie;", ['\u{22b4}', '\u{0}']),
    ("ltrif;", ['\u{25c2}', '\u{0}']),
    ("lurdshar;", ['\u{294a}', '\u{0}']),
    ("luruhar;", ['\u{2966}', '\u{0}']),
    ("lvertneqq;", ['\u{2268}', '\u{fe00}']),
    ("lvnE;", ['\u{2268}', '\u{fe00}']),
    ("mDDot;", ['\u{223a}', '\u{0}']),
    ("macr", ['\u{af}', '\u{0}']),
    ("macr;", ['\u{af}', '\u{0}']),
    ("male;", ['\u{2642}', '\u{0}']),
    ("malt;", ['\u{2720}', '\u{0}']),
    ("maltese;", ['\u{2720}', '\u{0}']),
    ("map;", ['\u{21a6}', '\u{0}']),
    ("mapsto;", ['\u{21a6}', '\u{0}']),
    ("mapstodown;", ['\u{21a7}', '\u{0}']),
    ("mapstoleft;", ['\u{21a4}', '\u{0}']),
    ("mapstoup;", ['\u{21a5}', '\u{0}']),
    ("marker;", ['\u{25ae}', '\u{0}']),
    ("mcomma;", ['\u{2a29}', '\u{0}']),
    ("mcy;", ['\u{43c}', '\u{0}']),
    ("mdash;", ['\u{2014}', '\u{0}']),
    ("measuredangle;", ['\u{2221}', '\u{0}']),
    ("mfr;", ['\u{1d52a}', '\u{0}']),
    ("mho;", ['\u{2127}', '\u{0}']),
    ("micro", ['\u{b5}', '\u{0}']),
    ("micro;", ['\u{b5}', '\u{0}']),
    ("mid;", ['\u{2223}', '\u{0}']),
    ("midast;", ['\u{2a}', '\u{0}']),
    ("midcir;", ['\u{2af0}', '\u{0}']),
    ("middot", ['\u{b7}', '\u{0}']),
    ("middot;", ['\u{b7}', '\u{0}']),
    ("minus;", ['\u{2212}', '\u{0}']),
    ("minusb;", ['\u{229f}', '\u{0}']),
    ("minusd;", ['\u{2238}', '\u{0}']),
    ("minusdu;", ['\u{2a2a}', '\u{0}']),
    ("mlcp;", ['\u{2adb}', '\u{0}']),
    ("mldr;", ['\u{2026}', '\u{0}']),
    ("mnplus;", ['\u{2213}', '\u{0}']),
    ("models;", ['\u{22a7}', '\u{0}']),
    ("mopf;", ['\u{1d55e}', '\u{0}']),
    ("mp;", ['\u{2213}', '\u{0}']),
    ("mscr;", ['\u{1d4c2}', '\u{0}']),
    ("mstpos;", ['\u{223e}', '\u{0}']),
    ("mu;", ['\u{3bc}', '\u{0}']),
    ("multimap;", ['\u{22b8}', '\u{0}']),
    ("mumap;", ['\u{22b8}', '\u{0}']),
    ("nGg;", ['\u{22d9}', '\u{338}']),
    ("nGt;", ['\u{226b}', '\u{20d2}']),
    ("nGtv;", ['\u{226b}', '\u{338}']),
    ("nLeftarrow;", ['\u{21cd}', '\u{0}']),
    ("nLeftrightarrow;", ['\u{21ce}', '\u{0}']),
    ("nLl;", ['\u{22d8}', '\u{338}']),
    ("nLt;", ['\u{226a}', '\u{20d2}']),
    ("nLtv;", ['\u{226a}', '\u{338}']),
    ("nRightarrow;", ['\u{21cf}', '\u{0}']),
    ("nVDash;", ['\u{22af}', '\u{0}']),
    ("nVdash;", ['\u{22ae}', '\u{0}']),
    ("nabla;", ['\u{2207}', '\u{0}']),
    ("nacute;", ['\u{144}', '\u{0}']),
    ("nang;", ['\u{2220}', '\u{20d2}']),
    ("nap;", ['\u{2249}', '\u{0}']),
    ("napE;", ['\u{2a70}', '\u{338}']),
    ("napid;", ['\u{224b}', '\u{338}']),
    ("napos;", ['\u{149}', '\u{0}']),
    ("napprox;", ['\u{2249}', '\u{0}']),
    ("natur;", ['\u{266e}', '\u{0}']),
    ("natural;", ['\u{266e}', '\u{0}']),
    ("naturals;", ['\u{2115}', '\u{0}']),
    ("nbsp", ['\u{a0}', '\u{0}']),
    ("nbsp;", ['\u{a0}', '\u{0}']),
    ("nbump;", ['\u{224e}', '\u{338}']),
    ("nbumpe;", ['\u{224f}', '\u{338}']),
    ("ncap;", ['\u{2a43}', '\u{0}']),
    ("ncaron;", ['\u{148}', '\u{0}']),
    ("ncedil;", ['\u{146}', '\u{0}']),
    ("ncong;", ['\u{2247}', '\u{0}']),
    ("ncongdot;", ['\u{2a6d}', '\u{338}']),
    ("ncup;", ['\u{2a42}', '\u{0}']),
    ("ncy;", ['\u{43d}', '\u{0}']),
    ("ndash;", ['\u{2013}', '\u{0}']),
    ("ne;", ['\u{2260}', '\u{0}']),
    ("neArr;", ['\u{21d7}', '\u{0}']),
    ("nearhk;", ['\u{2924}', '\u{0}']),
    ("nearr;", ['\u{2197}', '\u{0}']),
    ("nearrow;", ['\u{2197}', '\u{0}']),
    ("nedot;", ['\u{2250}', '\u{338}']),
    ("nequiv;", ['\u{2262}', '\u{0}']),
    ("nesear;", ['\u{2928}', '\u{0}']),
    ("nesim;", ['\u{2242}', '\u{338}']),
    ("nexist;", ['\u{2204}', '\u{0}']),
    ("nexists;", ['\u{2204}', '\u{0}']),
    ("nfr;", ['\u{1d52b}', '\u{0}']),
    ("ngE;", ['\u{2267}', '\u{338}']),
    ("nge;", ['\u{2271}', '\u{0}']),
    ("ngeq;", ['\u{2271}', '\u{0}']),
    ("ngeqq;", ['\u{2267}', '\u{338}']),
    ("ngeqslant;", ['\u{2a7e}', '\u{338}']),
    ("nges;", ['\u{2a7e}', '\u{338}']),
    ("ngsim;", ['\u{2275}', '\u{0}']),
    ("ngt;", ['\u{226f}', '\u{0}']),
    ("ngtr;", ['\u{226f}', '\u{0}']),
    ("nhArr;", ['\u{21ce}', '\u{0}']),
    ("nharr;", ['\u{21ae}', '\u{0}']),
    ("nhpar;", ['\u{2af2}', '\u{0}']),
    ("ni;", ['\u{220b}', '\u{0}']),
    ("nis;", ['\u{22fc}', '\u{0}']),
    ("nisd;", ['\u{22fa}', '\u{0}']),
    ("niv;", ['\u{220b}', '\u{0}']),
    ("njcy;", ['\u{45a}', '\u{0}']),
    ("nlArr;", ['\u{21cd}', '\u{0}']),
    ("nlE;", ['\u{2266}', '\u{338}']),
    ("nlarr;", ['\u{219a}', '\u{0}']),
    ("nldr;", ['\u{2025}', '\u{0}']),
    ("nle;", ['\u{2270}', '\u{0}']),
    ("nleftarrow;", ['\u{219a}', '\u{0}']),
    ("nleftrightarrow;", ['\u{21ae}', '\u{0}']),
    ("nleq;", ['\u{2270}', '\u{0}']),
    ("nleqq;", ['\u{2266}', '\u{338}']),
    ("nleqslant;", ['\u{2a7d}', '\u{338}']),
    ("nles;", ['\u{2a7d}', '\u{338}']),
    ("nless;", ['\u{226e}', '\u{0}']),
    ("nlsim;", ['\u{2274}', '\u{0}']),
    ("nlt;", ['\u{226e}', '\u{0}']),
    ("nltri;", ['\u{22ea}', '\u{0}']),
    ("nltrie;", ['\u{22ec}', '\u{0}']),
    ("nmid;", ['\u{2224}', '\u{0}']),
    ("nopf;", ['\u{1d55f}', '\u{0}']),
    ("not", ['\u{ac}', '\u{0}']),
    ("not;", ['\u{ac}', '\u{0}']),
    ("notin;", ['\u{2209}', '\u{0}']),
    ("notinE;", ['\u{22f9}', '\u{338}']),
    ("notindot;", ['\u{22f5}', '\u{338}']),
    ("notinva;", ['\u{2209}', '\u{0}']),
    ("notinvb;", ['\u{22f7}', '\u{0}']),
    ("notinvc;", ['\u{22f6}', '\u{0}']),
    ("notni;", ['\u{220c}', '\u{0}']),
    ("notniva;", ['\u{220c}', '\u{0}']),
    ("notnivb;", ['\u{22fe}', '\u{0}']),
    ("notnivc;", ['\u{22fd}', '\u{0}']),
    ("npar;", ['\u{2226}', '\u{0}']),
    ("nparallel;", ['\u{2226}', '\u{0}']),
    ("nparsl;", ['\u{2afd}', '\u{20e5}']),
    ("npart;", ['\u{2202}', '\u{338}']),
    ("npolint;", ['\u{2a14}', '\u{0}']),
    ("npr;", ['\u{2280}', '\u{0}']),
    ("nprcue;", ['\u{22e0}', '\u{0}']),
    ("npre;", ['\u{2aaf}', '\u{338}']),
    ("nprec;", ['\u{2280}', '\u{0}']),
    ("npreceq;", ['\u{2aaf}', '\u{338}']),
    ("nrArr;", ['\u{21cf}', '\u{0}']),
    ("nrarr;", ['\u{219b}', '\u{0}']),
    ("nrarrc;", ['\u{2933}', '\u{338}']),
    ("nrarrw;", ['\u{219d}', '\u{338}']),
    ("nrightarrow;", ['\u{219b}', '\u{0}']),
    ("nrtri;", ['\u{22eb}', '\u{0}']),
    ("nrtrie;", ['\u{22ed}', '\u{0}']),
    ("nsc;", ['\u{2281}', '\u{0}']),
    ("nsccue;", ['\u{22e1}', '\u{0}']),
    ("nsce;", ['\u{2ab0}', '\u{338}']),
    ("nscr;", ['\u{1d4c3}', '\u{0}']),
    ("nshortmid;", ['\u{2224}', '\u{0}']),
    ("nshortparallel;", ['\u{2226}', '\u{0}']),
    ("nsim;", ['\u{2241}', '\u{0}']),
    ("nsime;", ['\u{2244}', '\u{0}']),
    ("nsimeq;", ['\u{2244}', '\u{0}']),
    ("nsmid;", ['\u{2224}', '\u{0}']),
    ("nspar;", ['\u{2226}', '\u{0}']),
    ("nsqsube;", ['\u{22e2}', '\u{0}']),
    ("nsqsupe;", ['\u{22e3}', '\u{0}']),
    ("nsub;", ['\u{2284}', '\u{0}']),
    ("nsubE;", ['\u{2ac5}', '\u{338}']),
    ("nsube;", ['\u{2288}', '\u{0}']),
    ("nsubset;", ['\u{2282}', '\u{20d2}']),
    ("nsubseteq;", ['\u{2288}', '\u{0}']),
    ("nsubseteqq;", ['\u{2ac5}', '\u{338}']),
    ("nsucc;", ['\u{2281}', '\u{0}']),
    ("nsucceq;", ['\u{2ab0}', '\u{338}']),
    ("nsup;", ['\u{2285}', '\u{0}']),
    ("nsupE;", ['\u{2ac6}', '\u{338}']),
    ("nsupe;", ['\u{2289}', '\u{0}']),
    ("nsupset;", ['\u{2283}', '\u{20d2}']),
    ("nsupseteq;", ['\u{2289}', '\u{0}']),
    ("nsupseteqq;", ['\u{2ac6}', '\u{338}']),
    ("ntgl;", ['\u{2279}', '\u{0}']),
    ("ntilde", ['\u{f1}', '\u{0}']),
    ("ntilde;", ['\u{f1}', '\u{0}']),
    ("ntlg;", ['\u{2278}', '\u{0}']),
    ("ntriangleleft;", ['\u{22ea}', '\u{0}']),
    ("ntrianglelefteq;", ['\u{22ec}', '\u{0}']),
    ("ntriangleright;", ['\u{22eb}', '\u{0}']),
    ("ntrianglerighteq;", ['\u{22ed}', '\u{0}']),
    ("nu;", ['\u{3bd}', '\u{0}']),
    ("num;", ['\u{23}', '\u{0}']),
    ("numero;", ['\u{2116}', '\u{0}']),
    ("numsp;", ['\u{2007}', '\u{0}']),
    ("nvDash;", ['\u{22ad}', '\u{0}']),
    ("nvHarr;", ['\u{2904}', '\u{0}']),
    ("nvap;", ['\u{224d}', '\u{20d2}']),
    ("nvdash;", ['\u{22ac}', '\u{0}']),
    ("nvge;", ['\u{2265}', '\u{20d2}']),
    ("nvgt;", ['\u{3e}', '\u{20d2}']),
    ("nvinfin;", ['\u{29de}', '\u{0}']),
    ("nvlArr;", ['\u{2902}', '\u{0}']),
    ("nvle;", ['\u{2264}', '\u{20d2}']),
    ("nvlt;", ['\u{3c}', '\u{20d2}']),
    ("nvltrie;", ['\u{22b4}', '\u{20d2}']),
    ("nvrArr;", ['\u{2903}', '\u{0}']),
    ("nvrtrie;", ['\u{22b5}', '\u{20d2}']),
    ("nvsim;", ['\u{223c}', '\u{20d2}']),
    ("nwArr;", ['\u{21d6}', '\u{0}']),
    ("nwarhk;", ['\u{2923}', '\u{0}']),
    ("nwarr;", ['\u{2196}', '\u{0}']),
    ("nwarrow;", ['\u{2196}', '\u{0}']),
    ("nwnear;", ['\u{2927}', '\u{0}']),
    ("oS;", ['\u{24c8}', '\u{0}']),
    ("oacute", ['\u{f3}', '\u{0}']),
    ("oacute;", ['\u{f3}', '\u{0}']),
    ("oast;", ['\u{229b}', '\u{0}']),
    ("ocir;", ['\u{229a}', '\u{0}']),
    ("ocirc", ['\u{f4}', '\u{0}']),
    ("ocirc;", ['\u{f4}', '\u{0}']),
    ("ocy;", ['\u{43e}', '\u{0}']),
    ("odash;", ['\u{229d}', '\u{0}']),
    ("odblac;", ['\u{151}', '\u{0}']),
    ("odiv;", ['\u{2a38}', '\u{0}']),
    ("odot;", ['\u{2299}', '\u{0}']),
    ("odsold;", ['\u{29bc}', '\u{0}']),
    ("oelig;", ['\u{153}', '\u{0}']),
    ("ofcir;", ['\u{29bf}', '\u{0}']),
    ("ofr;", ['\u{1d52c}', '\u{0}']),
    ("ogon;", ['\u{2db}', '\u{0}']),
    ("ograve", ['\u{f2}', '\u{0}']),
    ("ograve;", ['\u{f2}', '\u{0}']),
    ("ogt;", ['\u{29c1}', '\u{0}']),
    ("ohbar;", ['\u{29b5}', '\u{0}']),
    ("ohm;", ['\u{3a9}', '\u{0}']),
    ("oint;", ['\u{222e}', '\u{0}']),
    ("olarr;", ['\u{21ba}', '\u{0}']),
    ("olcir;", ['\u{29be}', '\u{0}']),
    ("olcross;", ['\u{29bb}', '\u{0}']),
    ("oline;", ['\u{203e}', '\u{0}']),
    ("olt;", ['\u{29c0}', '\u{0}']),
    ("omacr;", ['\u{14d}', '\u{0}']),
    ("omega;", ['\u{3c9}', '\u{0}']),
    ("omicron;", ['\u{3bf}', '\u{0}']),
    ("omid;", ['\u{29b6}', '\u{0}']),
    ("ominus;", ['\u{2296}', '\u{0}']),
    ("oopf;", ['\u{1d560}', '\u{0}']),
    ("opar;", ['\u{29b7}', '\u{0}']),
    ("operp;", ['\u{29b9}', '\u{0}']),
    ("oplus;", ['\u{2295}', '\u{0}']),
    ("or;", ['\u{2228}', '\u{0}']),
    ("orarr;", ['\u{21bb}', '\u{0}']),
    ("ord;", ['\u{2a5d}', '\u{0}']),
    ("order;", ['\u{2134}', '\u{0}']),
    ("orderof;", ['\u{2134}', '\u{0}']),
    ("ordf", ['\u{aa}', '\u{0}']),
    ("ordf;", ['\u{aa}', '\u{0}']),
    ("ordm", ['\u{ba}', '\u{0}']),
    ("ordm;", ['\u{ba}', '\u{0}']),
    ("origof;", ['\u{22b6}', '\u{0}']),
    ("oror;", ['\u{2a56}', '\u{0}']),
    ("orslope;", ['\u{2a57}', '\u{0}']),
    ("orv;", ['\u{2a5b}', '\u{0}']),
    ("oscr;", ['\u{2134}', '\u{0}']),
    ("oslash", ['\u{f8}', '\u{0}']),
    ("oslash;", ['\u{f8}', '\u{0}']),
    ("osol;", ['\u{2298}', '\u{0}']),
    ("otilde", ['\u{f5}', '\u{0}']),
    ("otilde;", ['\u{f5}', '\u{0}']),
    ("otimes;", ['\u{2297}', '\u{0}']),
    ("otimesas;", ['\u{2a36}', '\u{0}']),
    ("ouml", ['\u{f6}', '\u{0}']),
    ("ouml;", ['\u{f6}', '\u{0}']),
    ("ovbar;", ['\u{233d}', '\u{0}']),
    ("par;", ['\u{2225}', '\u{0}']),
    ("para", ['\u{b6}', '\u{0}']),
    ("para;", ['\u{b6}', '\u{0}']),
    ("parallel;", ['\u{2225}', '\u{0}']),
    ("parsim;", ['\u{2af3}', '\u{0}']),
    ("parsl;", ['\u{2afd}', '\u{0}']),
    ("part;", ['\u{2202}', '\u{0}']),
    ("pcy;", ['\u{43f}', '\u{0}']),
    ("percnt;", ['\u{25}', '\u{0}']),
    ("period;", ['\u{2e}', '\u{0}']),
    ("permil;", ['\u{2030}', '\u{0}']),
    ("perp;", ['\u{22a5}', '\u{0}']),
    ("pertenk;", ['\u{2031}', '\u{0}']),
    ("pfr;", ['\u{1d52d}', '\u{0}']),
    ("phi;", ['\u{3c6}', '\u{0}']),
    ("phiv;", ['\u{3d5}', '\u{0}']),
    ("phmmat;", ['\u{2133}', '\u{0}']),
    ("phone;", ['\u{260e}', '\u{0}']),
    ("pi;", ['\u{3c0}', '\u{0}']),
    ("pitchfork;", ['\u{22d4}', '\u{0}']),
    ("piv;", ['\u{3d6}', '\u{0}']),
    ("planck;", ['\u{210f}', '\u{0}']),
    ("planckh;", ['\u{210e}', '\u{0}']),
    ("plankv;", ['\u{210f}', '\u{0}']),
    ("plus;", ['\u{2b}', '\u{0}']),
    ("plusacir;", ['\u{2a23}', '\u{0}']),
    ("plusb;", ['\u{229e}', '\u{0}']),
    ("pluscir;", ['\u{2a22}', '\u{0}']),
    ("plusdo;", ['\u{2214}', '\u{0}']),
    ("plusdu;", ['\u{2a25}', '\u{0}']),
    ("pluse;", ['\u{2a72}', '\u{0}']),
    ("plusmn", ['\u{b1}', '\u{0}']),
    ("plusmn;", ['\u{b1}', '\u{0}']),
    ("plussim;", ['\u{2a26}', '\u{0}']),
    ("plustwo;", ['\u{2a27}', '\u{0}']),
    ("pm;", ['\u{b1}', '\u{0}']),
    ("pointint;", ['\u{2a15}', '\u{0}']),
    ("popf;", ['\u{1d561}', '\u{0}']),
    ("pound", ['\u{a3}', '\u{0}']),
    ("pound;", ['\u{a3}', '\u{0}']),
    ("pr;", ['\u{227a}', '\u{0}']),
    ("prE;", ['\u{2ab3}', '\u{0}']),
    ("prap;", ['\u{2ab7}', '\u{0}']),
    ("prcue;", ['\u{227c}', '\u{0}']),
    ("pre;", ['\u{2aaf}', '\u{0}']),
    ("prec;", ['\u{227a}', '\u{0}']),
    ("precapprox;", ['\u{2ab7}', '\u{0}']),
    ("preccurlyeq;", ['\u{227c}', '\u{0}']),
    ("preceq;", ['\u{2aaf}', '\u{0}']),
    ("precnapprox;", ['\u{2ab9}', '\u{0}']),
    ("precneqq;", ['\u{2ab5}', '\u{0}']),
    ("precnsim;", ['\u{22e8}', '\u{0}']),
    ("precsim;", ['\u{227e}', '\u{0}']),
    ("prime;", ['\u{2032}', '\u{0}']),
    ("primes;", ['\u{2119}', '\u{0}']),
    ("prnE;", ['\u{2ab5}', '\u{0}']),
    ("prnap;", ['\u{2ab9}', '\u{0}']),
    ("prnsim;", ['\u{22e8}', '\u{0}']),
    ("prod;", ['\u{220f}', '\u{0}']),
    ("profalar;", ['\u{232e}', '\u{0}']),
    ("profline;", ['\u{2312}', '\u{0}']),
    ("profsurf;", ['\u{2313}', '\u{0}']),
    ("prop;", ['\u{221d}', '\u{0}']),
    ("propto;", ['\u{221d}', '\u{0}']),
    ("prsim;", ['\u{227e}', '\u{0}']),
    ("prurel;", ['\u{22b0}', '\u{0}']),
    ("pscr;", ['\u{1d4c5}', '\u{0}']),
    ("psi;", ['\u{3c8}', '\u{0}']),
    ("puncsp;", ['\u{2008}', '\u{0}']),
    ("qfr;", ['\u{1d52e}', '\u{0}']),
    ("qint;", ['\u{2a0c}', '\u{0}']),
    ("qopf;", ['\u{1d562}', '\u{0}']),
    ("qprime;", ['\u{2057}', '\u{0}']),
    ("qscr;", ['\u{1d4c6}', '\u{0}']),
    ("quaternions;", ['\u{210d}', '\u{0}']),
    ("quatint;", ['\u{2a16}', '\u{0}']),
    ("quest;", ['\u{3f}', '\u{0}']),
    ("questeq;", ['\u{225f}', '\u{0}']),
    ("quot", ['\u{22}', '\u{0}']),
    ("quot;", ['\u{22}', '\u{0}']),
    ("rAarr;", ['\u{21db}', '\u{0}']),
    ("rArr;", ['\u{21d2}', '\u{0}']),
    ("rAtail;", ['\u{291c}', '\u{0}']),
    ("rBarr;", ['\u{290f}', '\u{0}']),
    ("rHar;", ['\u{2964}', '\u{0}']),
    ("race;", ['\u{223d}', '\u{331}']),
    ("racute;", ['\u{155}', '\u{0}']),
    ("radic;", ['\u{221a}', '\u{0}']),
    ("raemptyv;", ['\u{29b3}', '\u{0}']),
    ("rang;", ['\u{27e9}', '\u{0}']),
    ("rangd;", ['\u{2992}', '\u{0}']),
    ("range;", ['\u{29a5}', '\u{0}']),
    ("rangle;", ['\u{27e9}', '\u{0}']),
    ("raquo", ['\u{bb}', '\u{0}']),
    ("raquo;", ['\u{bb}', '\u{0}']),
    ("rarr;", ['\u{2192}', '\u{0}']),
    ("rarrap;", ['\u{2975}', '\u{0}']),
    ("rarrb;", ['\u{21e5}', '\u{0}']),
    ("rarrbfs;", ['\u{2920}', '\u{0}']),
    ("rarrc;", ['\u{2933}', '\u{0}']),
    ("rarrfs;", ['\u{291e}', '\u{0}']),
    ("rarrhk;", ['\u{21aa}', '\u{0}']),
    ("rarrlp;", ['\u{21ac}', '\u{0}']),
    ("rarrpl;", ['\u{2945}', '\u{0}']),
    ("rarrsim;", ['\u{2974}', '\u{0}']),
    ("rarrtl;", ['\u{21a3}', '\u{0}']),
    ("rarrw;", ['\u{219d}', '\u{0}']),
    ("ratail;", ['\u{291a}', '\u{0}']),
    ("ratio;", ['\u{2236}', '\u{0}']),
    ("rationals;", ['\u{211a}', '\u{0}']),
    ("rbarr;", ['\u{290d}', '\u{0}']),
    ("rbbrk;", ['\u{2773}', '\u{0}']),
    ("rbrace;", ['\u{7d}', '\u{0}']),
    ("rbrack;", ['\u{5d}', '\u{0}']),
    ("rbrke;", ['\u{298c}', '\u{0}']),
    ("rbrksld;", ['\u{298e}', '\u{0}']),
    ("rbrkslu;", ['\u{2990}', '\u{0}']),
    ("rcaron;", ['\u{159}', '\u{0}']),
    ("rcedil;", ['\u{157}', '\u{0}']),
    ("rceil;", ['\u{2309}', '\u{0}']),
    ("rcub;", ['\u{7d}', '\u{0}']),
    ("rcy;", ['\u{440}', '\u{0}']),
    ("rdca;", ['\u{2937}', '\u{0}']),
    ("rdldhar;", ['\u{2969}', '\u{0}']),
    ("rdquo;", ['\u{201d}', '\u{0}']),
    ("rdquor;", ['\u{201d}', '\u{0}']),
    ("rdsh;", ['\u{21b3}', '\u{0}']),
    ("real;", ['\u{211c}', '\u{0}']),
    ("realine;", ['\u{211b}', '\u{0}']),
    ("realpart;", ['\u{211c}', '\u{0}']),
    ("reals;", ['\u{211d}', '\u{0}']),
    ("rect;", ['\u{25ad}', '\u{0}']),
    ("reg", ['\u{ae}', '\u{0}']),
    ("reg;", ['\u{ae}', '\u{0}']),
    ("rfisht;", ['\u{297d}', '\u{0}']),
    ("rfloor;", ['\u{230b}', '\u{0}']),
    ("rfr;", ['\u{1d52f}', '\u{0}']),
    ("rhard;", ['\u{21c1}', '\u{0}']),
    ("rharu;", ['\u{21c0}', '\u{0}']),
    ("rharul;", ['\u{296c}', '\u{0}']),
    ("rho;", ['\u{3c1}', '\u{0}']),
    ("rhov;", ['\u{3f1}', '\u{0}']),
    ("rightarrow;", ['\u{2192}', '\u{0}']),
    ("rightarrowtail;", ['\u{21a3}', '\u{0}']),
    ("rightharpoondown;", ['\u{21c1}', '\u{0}']),
    ("rightharpoonup;", ['\u{21c0}', '\u{0}']),
    ("rightleftarrows;", ['\u{21c4}', '\u{0}']),
    ("rightleftharpoons;", ['\u{21cc}', '\u{0}']),
    ("rightrightarrows;", ['\u{21c9}', '\u{0}']),
    ("rightsquigarrow;", ['\u{219d}', '\u{0}']),
    ("rightthreetimes;", ['\u{22cc}', '\u{0}']),
    ("ring;", ['\u{2da}', '\u{0}']),
    ("risingdotseq;", ['\u{2253}', '\u{0}']),
    ("rlarr;", ['\u{21c4}', '\u{0}']),
    ("rlhar;", ['\u{21cc}', '\u{0}']),
    ("rlm;", ['\u{200f}', '\u{0}']),
    ("rmoust;", ['\u{23b1}', '\u{0}']),
    ("rmoustache;", ['\u{23b1}', '\u{0}']),
    ("rnmid;", ['\u{2aee}', '\u{0}']),
    ("roang;", ['\u{27ed}', '\u{0}']),
    ("roarr;", ['\u{21fe}', '\u{0}']),
    ("robrk;", ['\u{27e7}', '\u{0}']),
    ("ropar;", ['\u{2986}', '\u{0}']),
    ("ropf;", ['\u{1d563}', '\u{0}']),
    ("roplus;", ['\u{2a2e}', '\u{0}']),
    ("rotimes;", ['\u{2a35}', '\u{0}']),
    ("rpar;", ['\u{29}', '\u{0}']),
    ("rpargt;", ['\u{2994}', '\u{0}']),
    ("rppolint;", ['\u{2a12}', '\u{0}']),
    ("rrarr;", ['\u{21c9}', '\u{0}']),
    ("rsaquo;", ['\u{203a}', '\u{0}']),
    ("rscr;", ['\u{1d4c7}', '\u{0}']),
    ("rsh;", ['\u{21b1}', '\u{0}']),
    ("rsqb;", ['\u{5d}', '\u{0}']),
    ("rsquo;", ['\u{2019}', '\u{0}']),
    ("rsquor;", ['\u{2019}', '\u{0}']),
    ("rthree;", ['\u{22cc}', '\u{0}']),
    ("rtimes;", ['\u{22ca}', '\u{0}']),
    ("rtri;", ['\u{25b9}', '\u{0}']),
    ("rtrie;", ['\u{22b5}', '\u{0}']),
    ("rtrif;", ['\u{25b8}', '\u{0}']),
    ("rtriltri;", ['\u{29ce}', '\u{0}']),
    ("ruluhar;", ['\u{2968}', '\u{0}']),
    ("rx;", ['\u{211e}', '\u{0}']),
    ("sacute;", ['\u{15b}', '\u{0}']),
    ("sbquo;", ['\u{201a}', '\u{0}']),
    ("sc;", ['\u{227b}', '\u{0}']),
    ("scE;", ['\u{2ab4}', '\u{0}']),
    ("scap;", ['\u{2ab8}', '\u{0}']),
    ("scaron;", ['\u{161}', '\u{0}']),
    ("sccue;", ['\u{227d}', '\u{0}']),
    ("sce;", ['\u{2ab0}', '\u{0}']),
    ("scedil;", ['\u{15f}', '\u{0}']),
    ("scirc;", ['\u{15d}', '\u{0}']),
    ("scnE;", ['\u{2ab6}', '\u{0}']),
    ("scnap;", ['\u{2aba}', '\u{0}']),
    ("scnsim;", ['\u{22e9}', '\u{0}']),
    ("scpolint;", ['\u{2a13}', '\u{0}']),
    ("scsim;", ['\u{227f}', '\u{0}']),
    ("scy;", ['\u{441}', '\u{0}']),
    ("sdot;", ['\u{22c5}', '\u{0}']),
    ("sdotb;", ['\u{22a1}', '\u{0}']),
    ("sdote;", ['\u{2a66}', '\u{0}']),
    ("seArr;", ['\u{21d8}', '\u{0}']),
    ("searhk;", ['\u{2925}', '\u{0}']),
    ("searr;", ['\u{2198}', '\u{0}']),
    ("searrow;", ['\u{2198}', '\u{0}']),
    ("sect", ['\u{a7}', '\u{0}']),
    ("sect;", ['\u{a7}', '\u{0}']),
    ("semi;", ['\u{3b}', '\u{0}']),
    ("seswar;", ['\u{2929}', '\u{0}']),
    ("setminus;", ['\u{2216}', '\u{0}']),
    ("setmn;", ['\u{2216}', '\u{0}']),
    ("sext;", ['\u{2736}', '\u{0}']),
    ("sfr;", ['\u{1d530}', '\u{0}']),
    ("sfrown;", ['\u{2322}', '\u{0}']),
    ("sharp;", ['\u{266f}', '\u{0}']),
    ("shchcy;", ['\u{449}', '\u{0}']),
    ("shcy;", ['\u{448}', '\u{0}']),
    ("shortmid;", ['\u{2223}', '\u{0}']),
    ("shortparallel;", ['\u{2225}', '\u{0}']),
    ("shy", ['\u{ad}', '\u{0}']),
    ("shy;", ['\u{ad}', '\u{0}']),
    ("sigma;", ['\u{3c3}', '\u{0}']),
    ("sigmaf;", ['\u{3c2}', '\u{0}']),
    ("sigmav;", ['\u{3c2}', '\u{0}']),
    ("sim;", ['\u{223c}', '\u{0}']),
    ("simdot;", ['\u{2a6a}', '\u{0}']),
    ("sime;", ['\u{2243}', '\u{0}']),
    ("simeq;", ['\u{2243}', '\u{0}']),
    ("simg;", ['\u{2a9e}', '\u{0}']),
    ("simgE;", ['\u{2aa0}', '\u{0}']),
    ("siml;", ['\u{2a9d}', '\u{0}']),
    ("simlE;", ['\u{2a9f}', '\u{0}']),
    ("simne;", ['\u{2246}', '\u{0}']),
    ("simplus;", ['\u{2a24}', '\u{0}']),
    ("simrarr;", ['\u{2972}', '\u{0}']),
    ("slarr;", ['\u{2190}', '\u{0}']),
    ("smallsetminus;", ['\u{2216}', '\u{0}']),
    ("smashp;", ['\u{2a33}', '\u{0}']),
    ("smeparsl;", ['\u{29e4}', '\u{0}']),
    ("smid;", ['\u{2223}', '\u{0}']),
    ("smile;", ['\u{2323}', '\u{0}']),
    ("smt;", ['\u{2aaa}', '\u{0}']),
    ("smte;", ['\u{2aac}', '\u{0}']),
    ("smtes;", ['\u{2aac}', '\u{fe00}']),
    ("softcy;", ['\u{44c}', '\u{0}']),
    ("sol;", ['\u{2f}', '\u{0}']),
    ("solb;", ['\u{29c4}', '\u{0}']),
    ("solbar;", ['\u{233f}', '\u{0}']),
    ("sopf;", ['\u{1d564}', '\u{0}']),
    ("spades;", ['\u{2660}', '\u{0}']),
    ("spadesuit;", ['\u{2660}', '\u{0}']),
    ("spar;", ['\u{2225}', '\u{0}']),
    ("sqcap;", ['\u{2293}', '\u{0}']),
    ("sqcaps;", ['\u{2293}', '\u{fe00}']),
    ("sqcup;", ['\u{2294}', '\u{0}']),
    ("sqcups;", ['\u{2294}', '\u{fe00}']),
    ("sqsub;", ['\u{228f}', '\u{0}']),
    ("sqsube;", ['\u{2291}', '\u{0}']),
    ("sqsubset;", ['\u{228f}', '\u{0}']),
    ("sqsubseteq;", ['\u{2291}', '\u{0}']),
    ("sqsup;", ['\u{2290}', '\u{0}']),
    ("sqsupe;", ['\u{2292}', '\u{0}']),
    ("sqsupset;", ['\u{2290}', '\u{0}']),
    ("sqsupseteq;", ['\u{2292}', '\u{0}']),
    ("squ;", ['\u{25a1}', '\u{0}']),
    ("square;", ['\u{25a1}', '\u{0}']),
    ("squarf;", ['\u{25aa}', '\u{0}']),
    ("squf;", ['\u{25aa}', '\u{0}']),
    ("srarr;", ['\u{2192}', '\u{0}']),
    ("sscr;", ['\u{1d4c8}', '\u{0}']),
    ("ssetmn;", ['\u{2216}', '\u{0}']),
    ("ssmile;", ['\u{2323}', '\u{0}']),
    ("sstarf;", ['\u{22c6}', '\u{0}']),
    ("star;", ['\u{2606}', '\u{0}']),
    ("starf;", ['\u{2605}', '\u{0}']),
    ("straightepsilon;", ['\u{3f5}', '\u{0}']),
    ("straightphi;", ['\u{3d5}', '\u{0}']),
    ("strns;", ['\u{af}', '\u{0}']),
    ("sub;", ['\u{2282}', '\u{0}']),
    ("subE;", ['\u{2ac5}', '\u{0}']),
    ("subdot;", ['\u{2abd}', '\u{0}']),
    ("sube;", ['\u{2286}', '\u{0}']),
    ("subedot;", ['\u{2ac3}', '\u{0}']),
    ("submult;", ['\u{2ac1}', '\u{0}']),
    ("subnE;", ['\u{2acb}', '\u{0}']),
    ("subne;", ['\u{228a}', '\u{0}']),
    ("subplus;", ['\u{2abf}', '\u{0}']),
    ("subrarr;", ['\u{2979}', '\u{0}']),
    ("subset;", ['\u{2282}', '\u{0}']),
    ("subseteq;", ['\u{2286}', '\u{0}']),
    ("subseteqq;", ['\u{2ac5}', '\u{0}']),
    ("subsetneq;", ['\u{228a}', '\u{0}']),
    ("subsetneqq;", ['\u{2acb}', '\u{0}']),
    ("subsim;", ['\u{2ac7}', '\u{0}']),
    ("subsub;", ['\u{2ad5}', '\u{0}']),
    ("subsup;", ['\u{2ad3}', '\u{0}']),
    ("succ;", ['\u{227b}', '\u{0}']),
    ("succapprox;", ['\u{2ab8}', '\u{0}']),
    ("succcurlyeq;", ['\u{227d}', '\u{0}']),
    ("succeq;", ['\u{2ab0}', '\u{0}']),
    ("succnapprox;", ['\u{2aba}', '\u{0}']),
    ("succneqq;", ['\u{2ab6}', '\u{0}']),
    ("succnsim;", ['\u{22e9}', '\u{0}']),
    ("succsim;", ['\u{227f}', '\u{0}']),
    ("sum;", ['\u{2211}', '\u{0}']),
    ("sung;", ['\u{266a}', '\u{0}']),
    ("sup1", ['\u{b9}', '\u{0}']),
    ("sup1;", ['\u{b9}', '\u{0}']),
    ("sup2", ['\u{b2}', '\u{0}']),
    ("sup2;", ['\u{b2}', '\u{0}']),
    ("sup3", ['\u{b3}', '\u{0}']),
    ("sup3;", ['\u{b3}', '\u{0}']),
    ("sup;", ['\u{2283}', '\u{0}']),
    ("supE;", ['\u{2ac6}', '\u{0}']),
    ("supdot;", ['\u{2abe}', '\u{0}']),
    ("supdsub;", ['\u{2ad8}', '\u{0}']),
    ("supe;", ['\u{2287}', '\u{0}']),
    ("supedot;", ['\u{2ac4}', '\u{0}']),
    ("suphsol;", ['\u{27c9}', '\u{0}']),
    ("suphsub;", ['\u{2ad7}', '\u{0}']),
    ("suplarr;", ['\u{297b}', '\u{0}']),
    ("supmult;", ['\u{2ac2}', '\u{0}']),
    ("supnE;", ['\u{2acc}', '\u{0}']),
    ("supne;", ['\u{228b}', '\u{0}']),
    ("supplus;", ['\u{2ac0}', '\u{0}']),
    ("supset;", ['\u{2283}', '\u{0}']),
    ("supseteq;", ['\u{2287}', '\u{0}']),
    ("supseteqq;", ['\u{2ac6}', '\u{0}']),
    ("supsetneq;", ['\u{228b}', '\u{0}']),
    ("supsetneqq;", ['\u{2acc}', '\u{0}']),
    ("supsim;", ['\u{2ac8}', '\u{0}']),
    ("supsub;", ['\u{2ad4}', '\u{0}']),
    ("supsup;", ['\u{2ad6}', '\u{0}']),
    ("swArr;", ['\u{21d9}', '\u{0}']),
    ("swarhk;", ['\u{2926}', '\u{0}']),
    ("swarr;", ['\u{2199}', '\u{0}']),
    ("swarrow;", ['\u{2199}', '\u{0}']),
    ("swnwar;", ['\u{292a}', '\u{0}']),
    ("szlig", ['\u{df}', '\u{0}']),
    ("szlig;", ['\u{df}', '\u{0}']),
    ("target;", ['\u{2316}', '\u{0}']),
    ("tau;", ['\u{3c4}', '\u{0}']),
    ("tbrk;", ['\u{23b4}', '\u{0}']),
    ("tcaron;", ['\u{165}', '\u{0}']),
    ("tcedil;", ['\u{163}', '\u{0}']),
    ("tcy;", ['\u{442}', '\u{0}']),
    ("tdot;", ['\u{20db}', '\u{0}']),
    ("telrec;", ['\u{2315}', '\u{0}']),
    ("tfr;", ['\u{1d531}', '\u{0}']),
    ("there4;", ['\u{2234}', '\u{0}']),
    ("therefore;", ['\u{2234}', '\u{0}']),
    ("theta;", ['\u{3b8}', '\u{0}']),
    ("thetasym;", ['\u{3d1}', '\u{0}']),
    ("thetav;", ['\u{3d1}', '\u{0}']),
    ("thickapprox;", ['\u{2248}', '\u{0}']),
    ("thicksim;", ['\u{223c}', '\u{0}']),
    ("thinsp;", ['\u{2009}', '\u{0}']),
    ("thkap;", ['\u{2248}', '\u{0}']),
    ("thksim;", ['\u{223c}', '\u{0}']),
    ("thorn", ['\u{fe}', '\u{0}']),
    ("thorn;", ['\u{fe}', '\u{0}']),
    ("tilde;", ['\u{2dc}', '\u{0}']),
    ("times", ['\u{d7}', '\u{0}']),
    ("times;", ['\u{d7}', '\u{0}']),
    ("timesb;", ['\u{22a0}', '\u{0}']),
    ("timesbar;", ['\u{2a31}', '\u{0}']),
    ("timesd;", ['\u{2a30}', '\u{0}']),
    ("tint;", ['\u{222d}', '\u{0}']),
    ("toea;", ['\u{2928}', '\u{0}']),
    ("top;", ['\u{22a4}', '\u{0}']),
    ("topbot;", ['\u{2336}', '\u{0}']),
    ("topcir;", ['\u{2af1}', '\u{0}']),
    ("topf;", ['\u{1d565}', '\u{0}']),
    ("topfork;", ['\u{2ada}', '\u{0}']),
    ("tosa;", ['\u{2929}', '\u{0}']),
    ("tprime;", ['\u{2034}', '\u{0}']),
    ("trade;", ['\u{2122}', '\u{0}']),
    ("triangle;", ['\u{25b5}', '\u{0}']),
    ("triangledown;", ['\u{25bf}', '\u{0}']),
    ("triangleleft;", ['\u{25c3}', '\u{0}']),
    ("trianglelefteq;", ['\u{22b4}', '\u{0}']),
    ("triangleq;", ['\u{225c}', '\u{0}']),
    ("triangleright;", ['\u{25b9}', '\u{0}']),
    ("trianglerighteq;", ['\u{22b5}', '\u{0}']),
    ("tridot;", ['\u{25ec}', '\u{0}']),
    ("trie;", ['\u{225c}', '\u{0}']),
    ("triminus;", ['\u{2a3a}', '\u{0}']),
    ("triplus;", ['\u{2a39}', '\u{0}']),
    ("trisb;", ['\u{29cd}', '\u{0}']),
    ("tritime;", ['\u{2a3b}', '\u{0}']),
    ("trpezium;", ['\u{23e2}', '\u{0}']),
    ("tscr;", ['\u{1d4c9}', '\u{0}']),
    ("tscy;", ['\u{446}', '\u{0}']),
    ("tshcy;", ['\u{45b}', '\u{0}']),
    ("tstrok;", ['\u{167}', '\u{0}']),
    ("twixt;", ['\u{226c}', '\u{0}']),
    ("twoheadleftarrow;", ['\u{219e}', '\u{0}']),
    ("twoheadrightarrow;", ['\u{21a0}', '\u{0}']),
    ("uArr;", ['\u{21d1}', '\u{0}']),
    ("uHar;", ['\u{2963}', '\u{0}']),
    ("uacute", ['\u{fa}', '\u{0}']),
    ("uacute;", ['\u{fa}', '\u{0}']),
    ("uarr;", ['\u{2191}', '\u{0}']),
    ("ubrcy;", ['\u{45e}', '\u{0}']),
    ("ubreve;", ['\u{16d}', '\u{0}']),
    ("ucirc", ['\u{fb}', '\u{0}']),
    ("ucirc;", ['\u{fb}', '\u{0}']),
    ("ucy;", ['\u{443}', '\u{0}']),
    ("udarr;", ['\u{21c5}', '\u{0}']),
    ("udblac;", ['\u{171}', '\u{0}']),
    ("udhar;", ['\u{296e}', '\u{0}']),
    ("ufisht;", ['\u{297e}', '\u{0}']),
    ("ufr;", ['\u{1d532}', '\u{0}']),
    ("ugrave", ['\u{f9}', '\u{0}']),
    ("ugrave;", ['\u{f9}', '\u{0}']),
    ("uharl;", ['\u{21bf}', '\u{0}']),
    ("uharr;", ['\u{21be}', '\u{0}']),
    ("uhblk;", ['\u{2580}', '\u{0}']),
    ("ulcorn;", ['\u{231c}', '\u{0}']),
    ("ulcorner;", ['\u{231c}', '\u{0}']),
    ("ulcrop;", ['\u{230f}', '\u{0}']),
    ("ultri;", ['\u{25f8}', '\u{0}']),
    ("umacr;", ['\u{16b}', '\u{0}']),
    ("uml", ['\u{a8}', '\u{0}']),
    ("uml;", ['\u{a8}', '\u{0}']),
    ("uogon;", ['\u{173}', '\u{0}']),
    ("uopf;", ['\u{1d566}', '\u{0}']),
    ("uparrow;", ['\u{2191}', '\u{0}']),
    ("updownarrow;", ['\u{2195}', '\u{0}']),
    ("upharpoonleft;", ['\u{21bf}', '\u{0}']),
    ("upharpoonright;", ['\u{21be}', '\u{0}']),
    ("uplus;", ['\u{228e}', '\u{0}']),
    ("upsi;", ['\u{3c5}', '\u{0}']),
    ("upsih;", ['\u{3d2}', '\u{0}']),
    ("upsilon;", ['\u{3c5}', '\u{0}']),
    ("upuparrows;", ['\u{21c8}', '\u{0}']),
    ("urcorn;", ['\u{231d}', '\u{0}']),
    ("urcorner;", ['\u{231d}', '\u{0}']),
    ("urcrop;", ['\u{230e}', '\u{0}']),
    ("uring;", ['\u{16f}', '\u{0}']),
    ("urtri;", ['\u{25f9}', '\u{0}']),
    ("uscr;", ['\u{1d4ca}', '\u{0}']),
    ("utdot;", ['\u{22f0}', '\u{0}']),
    ("utilde;", ['\u{169}', '\u{0}']),
    ("utri;", ['\u{25b5}', '\u{0}']),
    ("utrif;", ['\u{25b4}', '\u{0}']),
    ("uuarr;", ['\u{21c8}', '\u{0}']),
    ("uuml", ['\u{fc}', '\u{0}']),
    ("uuml;", ['\u{fc}', '\u{0}']),
    ("uwangle;", ['\u{29a7}', '\u{0}']),
    ("vArr;", ['\u{21d5}', '\u{0}']),
    ("vBar;", ['\u{2ae8}', '\u{0}']),
    ("vBarv;", ['\u{2ae9}', '\u{0}']),
    ("vDash;", ['\u{22a8}', '\u{0}']),
    ("vangrt;", ['\u{299c}', '\u{0}']),
    ("varepsilon;", ['\u{3f5}', '\u{0}']),
    ("varkappa;", ['\u{3f0}', '\u{0}']),
    ("varnothing;", ['\u{2205}', '\u{0}']),
    ("varphi;", ['\u{3d5}', '\u{0}']),
    ("varpi;", ['\u{3d6}', '\u{0}']),
    ("varpropto;", ['\u{221d}', '\u{0}']),
    ("varr;", ['\u{2195}', '\u{0}']),
    ("varrho;", ['\u{3f1}', '\u{0}']),
    ("varsigma;", ['\u{3c2}', '\u{0}']),
    ("varsubsetneq;", ['\u{228a}', '\u{fe00}']),
    ("varsubsetneqq;", ['\u{2acb}', '\u{fe00}']),
    ("varsupsetneq;", ['\u{228b}', '\u{fe00}']),
    ("varsupsetneqq;", ['\u{2acc}', '\u{fe00}']),
    ("vartheta;", ['\u{3d1}', '\u{0}']),
    ("vartriangleleft;", ['\u{22b2}', '\u{0}']),
    ("vartriangleright;", ['\u{22b3}', '\u{0}']),
    ("vcy;", ['\u{432}', '\u{0}']),
    ("vdash;", ['\u{22a2}', '\u{0}']),
    ("vee;", ['\u{2228}', '\u{0}']),
    ("veebar;", ['\u{22bb}', '\u{0}']),
    ("veeeq;", ['\u{225a}', '\u{0}']),
    ("vellip;", ['\u{22ee}', '\u{0}']),
    ("verbar;", ['\u{7c}', '\u{0}']),
    ("vert;", ['\u{7c}', '\u{0}']),
    ("vfr;", ['\u{1d533}', '\u{0}']),
    ("vltri;", ['\u{22b2}', '\u{0}']),
    ("vnsub;", ['\u{2282}', '\u{20d2}']),
    ("vnsup;", ['\u{2283}', '\u{20d2}']),
    ("vopf;", ['\u{1d567}', '\u{0}']),
    ("vprop;", ['\u{221d}', '\u{0}']),
    ("vrtri;", ['\u{22b3}', '\u{0}']),
    ("vscr;", ['\u{1d4cb}', '\u{0}']),
    ("vsubnE;", ['\u{2acb}', '\u{fe00}']),
    ("vsubne;", ['\u{228a}', '\u{fe00}']),
    ("vsupnE;", ['\u{2acc}', '\u{fe00}']),
    ("vsupne;", ['\u{228b}', '\u{fe00}']),
    ("vzigzag;", ['\u{299a}', '\u{0}']),
    ("wcirc;", ['\u{175}', '\u{0}']),
    ("wedbar;", ['\u{2a5f}', '\u{0}']),
    ("wedge;", ['\u{2227}', '\u{0}']),
    ("wedgeq;", ['\u{2259}', '\u{0}']),
    ("weierp;", ['\u{2118}', '\u{0}']),
    ("wfr;", ['\u{1d534}', '\u{0}']),
    ("wopf;", ['\u{1d568}', '\u{0}']),
    ("wp;", ['\u{2118}', '\u{0}']),
    ("wr;", ['\u{2240}', '\u{0}']),
    ("wreath;", ['\u{2240}', '\u{0}']),
    ("wscr;", ['\u{1d4cc}', '\u{0}']),
    ("xcap;", ['\u{22c2}', '\u{0}']),
    ("xcirc;", ['\u{25ef}', '\u{0}']),
    ("xcup;", ['\u{22c3}', '\u{0}']),
    ("xdtri;", ['\u{25bd}', '\u{0}']),
    ("xfr;", ['\u{1d535}', '\u{0}']),
    ("xhArr;", ['\u{27fa}', '\u{0}']),
    ("xharr;", ['\u{27f7}', '\u{0}']),
    ("xi;", ['\u{3be}', '\u{0}']),
    ("xlArr;", ['\u{27f8}', '\u{0}']),
    ("xlarr;", ['\u{27f5}', '\u{0}']),
    ("xmap;", ['\u{27fc}', '\u{0}']),
    ("xnis;", ['\u{22fb}', '\u{0}']),
    ("xodot;", ['\u{2a00}', '\u{0}']),
    ("xopf;", ['\u{1d569}', '\u{0}']),
    ("xoplus;", ['\u{2a01}', '\u{0}']),
    ("xotime;", ['\u{2a02}', '\u{0}']),
    ("xrArr;", ['\u{27f9}', '\u{0}']),
    ("xrarr;", ['\u{27f6}', '\u{0}']),
    ("xscr;", ['\u{1d4cd}', '\u{0}']),
    ("xsqcup;", ['\u{2a06}', '\u{0}']),
    ("xuplus;", ['\u{2a04}', '\u{0}']),
    ("xutri;", ['\u{25b3}', '\u{0}']),
    ("xvee;", ['\u{22c1}', '\u{0}']),
    ("xwedge;", ['\u{22c0}', '\u{0}']),
    ("yacute", ['\u{fd}', '\u{0}']),
    ("yacute;", ['\u{fd}', '\u{0}']),
    ("yacy;", ['\u{44f}', '\u{0}']),
    ("ycirc;", ['\u{177}', '\u{0}']),
    ("ycy;", ['\u{44b}', '\u{0}']),
    ("yen", ['\u{a5}', '\u{0}']),
    ("yen;", ['\u{a5}', '\u{0}']),
    ("yfr;", ['\u{1d536}', '\u{0}']),
    ("yicy;", ['\u{457}', '\u{0}']),
    ("yopf;", ['\u{1d56a}', '\u{0}']),
    ("yscr;", ['\u{1d4ce}', '\u{0}']),
    ("yucy;", ['\u{44e}', '\u{0}']),
    ("yuml", ['\u{ff}', '\u{0}']),
    ("yuml;", ['\u{ff}', '\u{0}']),
    ("zacute;", ['\u{17a}', '\u{0}']),
    ("zcaron;", ['\u{17e}', '\u{0}']),
    ("zcy;", ['\u{437}', '\u{0}']),
    ("zdot;", ['\u{17c}', '\u{0}']),
    ("zeetrf;", ['\u{2128}', '\u{0}']),
    ("zeta;", ['\u{3b6}', '\u{0}']),
    ("zfr;", ['\u{1d537}', '\u{0}']),
    ("zhcy;", ['\u{436}', '\u{0}']),
    ("zigrarr;", ['\u{21dd}', '\u{0}']),
    ("zopf;", ['\u{1d56b}', '\u{0}']),
    ("zscr;", ['\u{1d4cf}', '\u{0}']),
    ("zwj;", ['\u{200d}', '\u{0}']),
    ("zwnj;", ['\u{200c}', '\u{0}']),
];

/// Length in bytes of the longest entity name.
pub const LONGEST_ENTITY_NAME: usize = 32;
