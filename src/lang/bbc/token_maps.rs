//! Token tables for BBC BASIC V
//!
//! Keywords are keyed by a symbolic token identifier.  The byte maps resolve
//! a token byte to an identifier within one escape context.

pub const KEYWORDS: [(&str,&str);164] = [
	("TAND","AND"),
	("TABS","ABS"),
	("TACS","ACS"),
	("TADC","ADVAL"),
	("TASC","ASC"),
	("TASN","ASN"),
	("TATN","ATN"),
	("TAUTO","AUTO"),
	("TAPPEND","APPEND"),
	("TBGET","BGET"),
	("TBPUT","BPUT"),
	("TBEATS","BEATS"),
	("TBEAT","BEAT"),
	// COLOUR is shadowed by COLOR for this identifier
	("TTEXT","COLOR"),
	("TCALL","CALL"),
	("TCASE","CASE"),
	("TCHAIN","CHAIN"),
	("TCHRD","CHR$"),
	("TCLEAR","CLEAR"),
	("TCLOSE","CLOSE"),
	("TCLG","CLG"),
	("TCLS","CLS"),
	("TCOS","COS"),
	("TCOUNT","COUNT"),
	("TCIRCLE","CIRCLE"),
	("TCRUNCH","CRUNCH"),
	("TDATA","DATA"),
	("TDEG","DEG"),
	("TDEF","DEF"),
	("TDELET","DELETE"),
	("TDIV","DIV"),
	("TDIM","DIM"),
	("TDRAW","DRAW"),
	("TENDPR","ENDPROC"),
	("TEDIT","EDIT"),
	("TENDWH","ENDWHILE"),
	("TENDCA","ENDCASE"),
	("TENDIF","ENDIF"),
	("TEND","END"),
	("TENVEL","ENVELOPE"),
	("TELSE","ELSE"),
	("TEVAL","EVAL"),
	("TERL","ERL"),
	("TERROR","ERROR"),
	("TEOF","EOF"),
	("TEOR","EOR"),
	("TERR","ERR"),
	("TEXP","EXP"),
	("TEXT","EXT"),
	("TELLIPSE","ELLIPSE"),
	("TFOR","FOR"),
	("TFALSE","FALSE"),
	("TFILL","FILL"),
	("TFN","FN"),
	("TGOTO","GOTO"),
	("TGETD","GET$"),
	("TGET","GET"),
	("TGOSUB","GOSUB"),
	("TGRAPH","GCOL"),
	("THIMEM","HIMEM"),
	("THELP","HELP"),
	("TINPUT","INPUT"),
	("TIF","IF"),
	("TINKED","INKEY$"),
	("TINKEY","INKEY"),
	("TINT","INT"),
	("TINSTR","INSTR("),
	("TINSTALL","INSTALL"),
	("TLIST","LIST"),
	("TLINE","LINE"),
	("TLOAD","LOAD"),
	("TLOMEM","LOMEM"),
	("TLOCAL","LOCAL"),
	("TLEFTD","LEFT$("),
	("TLEN","LEN"),
	("TLET","LET"),
	("TLOG","LOG"),
	("TLN","LN"),
	("TLIBRARY","LIBRARY"),
	("TLVAR","LVAR"),
	("TMIDD","MID$("),
	("TMODE","MODE"),
	("TMOD","MOD"),
	("TMOVE","MOVE"),
	("TMOUSE","MOUSE"),
	("TNEXT","NEXT"),
	("TNEW","NEW"),
	("TNOT","NOT"),
	("TOLD","OLD"),
	("TON","ON"),
	("TOFF","OFF"),
	("TOF","OF"),
	("TORGIN","ORIGIN"),
	("TOR","OR"),
	("TOPENU","OPENIN"),
	("TOPENO","OPENOUT"),
	("TOPENI","OPENUP"),
	("TOSCL","OSCLI"),
	("TOTHER","OTHERWISE"),
	("TOVERLAY","OVERLAY"),
	("TPRINT","PRINT"),
	("TPAGE","PAGE"),
	("TPTR","PTR"),
	("TPI","PI"),
	("TPLOT","PLOT"),
	("TPOINT","POINT("),
	("TPSET","POINT"),
	("TPROC","PROC"),
	("TPOS","POS"),
	("TQUIT","QUIT"),
	("TRETURN","RETURN"),
	("TREPEAT","REPEAT"),
	("TREPORT","REPORT"),
	("TREAD","READ"),
	("TREM","REM"),
	("TRUN","RUN"),
	("TRAD","RAD"),
	("TRESTORE","RESTORE"),
	("TRIGHTD","RIGHT$("),
	("TRND","RND"),
	("TRECT","RECTANGLE"),
	("TRENUM","RENUMBER"),
	("TSTEP","STEP"),
	("TSAVE","SAVE"),
	("TSGN","SGN"),
	("TSIN","SIN"),
	("TSQR","SQR"),
	("TBEEP","SOUND"),
	("TSPC","SPC"),
	("TSTRD","STR$"),
	("TSTRND","STRING$("),
	("TSTOP","STOP"),
	("TSTEREO","STEREO"),
	("TSUM","SUM"),
	("TSWAP","SWAP"),
	("TSYS","SYS"),
	("TTAN","TAN"),
	("TTAB","TAB("),
	("TTEMPO","TEMPO"),
	("TTEXTLOAD","TEXTLOAD"),
	("TTEXTSAVE","TEXTSAVE"),
	("TTHEN","THEN"),
	("TTIME","TIME"),
	("TTINT","TINT"),
	("TTO","TO"),
	("TTRACE","TRACE"),
	("TTRUE","TRUE"),
	("TTWINO","TWINO"),
	("TTWIN","TWIN"),
	("TUNTIL","UNTIL"),
	("TUSR","USR"),
	("TVDU","VDU"),
	("TVAL","VAL"),
	("TVPOS","VPOS"),
	("TVOICES","VOICES"),
	("TVOICE","VOICE"),
	("TWHILE","WHILE"),
	("TWHEN","WHEN"),
	("TWAIT","WAIT"),
	("TWIDTH","WIDTH"),
	// statement forms of the pseudo-variables
	("TPAGE2","PAGE"),
	("TTIME2","TIME"),
	("TLOMM2","LOMEM"),
	("THIMM2","HIMEM"),
];

/// Root context, every byte from 0x7f up
pub const ROOT_MAP: [(u8,&str);129] = [
	(0x7f,"TOTHER"),
	(0x80,"TAND"),
	(0x81,"TDIV"),
	(0x82,"TEOR"),
	(0x83,"TMOD"),
	(0x84,"TOR"),
	(0x85,"TERROR"),
	(0x86,"TLINE"),
	(0x87,"TOFF"),
	(0x88,"TSTEP"),
	(0x89,"TSPC"),
	(0x8a,"TTAB"),
	(0x8b,"TELSE"),
	(0x8c,"TTHEN"),
	(0x8d,"TCONST"),
	(0x8e,"TOPENU"),
	(0x8f,"TPTR"),
	(0x90,"TPAGE"),
	(0x91,"TTIME"),
	(0x92,"TLOMEM"),
	(0x93,"THIMEM"),
	(0x94,"TABS"),
	(0x95,"TACS"),
	(0x96,"TADC"),
	(0x97,"TASC"),
	(0x98,"TASN"),
	(0x99,"TATN"),
	(0x9a,"TBGET"),
	(0x9b,"TCOS"),
	(0x9c,"TCOUNT"),
	(0x9d,"TDEG"),
	(0x9e,"TERL"),
	(0x9f,"TERR"),
	(0xa0,"TEVAL"),
	(0xa1,"TEXP"),
	(0xa2,"TEXT"),
	(0xa3,"TFALSE"),
	(0xa4,"TFN"),
	(0xa5,"TGET"),
	(0xa6,"TINKEY"),
	(0xa7,"TINSTR"),
	(0xa8,"TINT"),
	(0xa9,"TLEN"),
	(0xaa,"TLN"),
	(0xab,"TLOG"),
	(0xac,"TNOT"),
	(0xad,"TOPENI"),
	(0xae,"TOPENO"),
	(0xaf,"TPI"),
	(0xb0,"TPOINT"),
	(0xb1,"TPOS"),
	(0xb2,"TRAD"),
	(0xb3,"TRND"),
	(0xb4,"TSGN"),
	(0xb5,"TSIN"),
	(0xb6,"TSQR"),
	(0xb7,"TTAN"),
	(0xb8,"TTO"),
	(0xb9,"TTRUE"),
	(0xba,"TUSR"),
	(0xbb,"TVAL"),
	(0xbc,"TVPOS"),
	(0xbd,"TCHRD"),
	(0xbe,"TGETD"),
	(0xbf,"TINKED"),
	(0xc0,"TLEFTD"),
	(0xc1,"TMIDD"),
	(0xc2,"TRIGHTD"),
	(0xc3,"TSTRD"),
	(0xc4,"TSTRND"),
	(0xc5,"TEOF"),
	(0xc6,"TESCFN"),
	(0xc7,"TESCCOM"),
	(0xc8,"TESCSTMT"),
	(0xc9,"TWHEN"),
	(0xca,"TOF"),
	(0xcb,"TENDCA"),
	(0xcc,"TELSE"),
	(0xcd,"TENDIF"),
	(0xce,"TENDWH"),
	(0xcf,"TPTR"),
	(0xd0,"TPAGE2"),
	(0xd1,"TTIME2"),
	(0xd2,"TLOMM2"),
	(0xd3,"THIMM2"),
	(0xd4,"TBEEP"),
	(0xd5,"TBPUT"),
	(0xd6,"TCALL"),
	(0xd7,"TCHAIN"),
	(0xd8,"TCLEAR"),
	(0xd9,"TCLOSE"),
	(0xda,"TCLG"),
	(0xdb,"TCLS"),
	(0xdc,"TDATA"),
	(0xdd,"TDEF"),
	(0xde,"TDIM"),
	(0xdf,"TDRAW"),
	(0xe0,"TEND"),
	(0xe1,"TENDPR"),
	(0xe2,"TENVEL"),
	(0xe3,"TFOR"),
	(0xe4,"TGOSUB"),
	(0xe5,"TGOTO"),
	(0xe6,"TGRAPH"),
	(0xe7,"TIF"),
	(0xe8,"TINPUT"),
	(0xe9,"TLET"),
	(0xea,"TLOCAL"),
	(0xeb,"TMODE"),
	(0xec,"TMOVE"),
	(0xed,"TNEXT"),
	(0xee,"TON"),
	(0xef,"TVDU"),
	(0xf0,"TPLOT"),
	(0xf1,"TPRINT"),
	(0xf2,"TPROC"),
	(0xf3,"TREAD"),
	(0xf4,"TREM"),
	(0xf5,"TREPEAT"),
	(0xf6,"TREPORT"),
	(0xf7,"TRESTORE"),
	(0xf8,"TRETURN"),
	(0xf9,"TRUN"),
	(0xfa,"TSTOP"),
	(0xfb,"TTEXT"),
	(0xfc,"TTRACE"),
	(0xfd,"TUNTIL"),
	(0xfe,"TWIDTH"),
	(0xff,"TOSCL"),
];

/// Two byte functions, escape 0xc6
pub const FUNCTION_MAP: [(u8,&str);3] = [
	(0x8e,"TSUM"),
	(0x8f,"TBEAT"),
	(0x90,"TTWOFUNCLIMIT"),
];

/// Two byte commands, escape 0xc7
pub const COMMAND_MAP: [(u8,&str);19] = [
	(0x8e,"TAPPEND"),
	(0x8f,"TAUTO"),
	(0x90,"TCRUNCH"),
	(0x91,"TDELET"),
	(0x92,"TEDIT"),
	(0x93,"THELP"),
	(0x94,"TLIST"),
	(0x95,"TLOAD"),
	(0x96,"TLVAR"),
	(0x97,"TNEW"),
	(0x98,"TOLD"),
	(0x99,"TRENUM"),
	(0x9a,"TSAVE"),
	(0x9b,"TTEXTLOAD"),
	(0x9c,"TTEXTSAVE"),
	(0x9d,"TTWIN"),
	(0x9e,"TTWINO"),
	(0x9f,"TINSTALL"),
	(0xa0,"TTWOCOMMLIMIT"),
];

/// Two byte statements, escape 0xc8
pub const STATEMENT_MAP: [(u8,&str);23] = [
	(0x8e,"TCASE"),
	(0x8f,"TCIRCLE"),
	(0x90,"TFILL"),
	(0x91,"TORGIN"),
	(0x92,"TPSET"),
	(0x93,"TRECT"),
	(0x94,"TSWAP"),
	(0x95,"TWHILE"),
	(0x96,"TWAIT"),
	(0x97,"TMOUSE"),
	(0x98,"TQUIT"),
	(0x99,"TSYS"),
	(0x9a,"TINSTALLBAD"),
	(0x9b,"TLIBRARY"),
	(0x9c,"TTINT"),
	(0x9d,"TELLIPSE"),
	(0x9e,"TBEATS"),
	(0x9f,"TTEMPO"),
	(0xa0,"TVOICES"),
	(0xa1,"TVOICE"),
	(0xa2,"TSTEREO"),
	(0xa3,"TOVERLAY"),
	(0xa4,"TTWOSTMTLIMIT"),
];
